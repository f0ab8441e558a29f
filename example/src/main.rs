//! Drives a range slider through a scripted session: mount from a dataset,
//! drag the low handle, wait for the settled change, apply a server update,
//! then tear down.

use std::time::Duration;

use rslider::{
    CallbackWith, Handle, HostElement, PointerEvent, PointerEventContent, PointerTarget,
    PxPosition, TrackMetrics,
};
use rslider_host::{FormDocument, FormElement, HookEvent, SliderHook};
use tracing::{error, info};

const POINTER: u64 = 1;

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new(
            "error,example=info,rslider=info,rslider_host=info",
        ) {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .try_init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_tracing();

    let document = FormDocument::new();
    let element = document.insert(
        FormElement::new("price")
            .with_data("values", "0-100")
            .with_data("step", "10")
            .with_data("range", "true")
            .with_data("scale", "true")
            .with_data("labels", "true")
            .with_data("tooltip", "true")
            .with_data("set", "20|80"),
    );

    let sink = CallbackWith::new(|event: HookEvent| {
        info!(name = %event.name, value = ?event.value, "pushed event");
    });
    let mut hook = match SliderHook::mounted(&document, "price", sink) {
        Ok(hook) => hook,
        Err(err) => {
            error!(%err, "failed to mount slider");
            return;
        }
    };

    let slider = hook.slider_mut();
    slider.measure(TrackMetrics::new(40, 500, 16));
    info!(view = ?slider.view(), "mounted");

    let grab = PxPosition::from_x(140);
    let hit = slider.hit_test(grab);
    info!(?hit, "pressed");
    if hit == PointerTarget::Handle(Handle::Start) {
        slider.handle_pointer(PointerEvent::new(
            POINTER,
            grab,
            PointerEventContent::Down(hit),
        ));
        for x in [170, 210, 250, 290] {
            tokio::time::sleep(Duration::from_millis(60)).await;
            let position = PxPosition::from_x(x);
            if slider.handle_pointer(PointerEvent::new(POINTER, position, PointerEventContent::Move))
            {
                info!(x, value = %slider.value(), "moved");
            }
            slider.poll();
        }
        slider.handle_pointer(PointerEvent::new(
            POINTER,
            PxPosition::from_x(290),
            PointerEventContent::Up,
        ));
    }

    while let Some(deadline) = slider.pending_deadline() {
        tokio::time::sleep_until(deadline.into()).await;
        if let Some(value) = slider.poll() {
            info!(%value, host = %element.value(), "settled");
        }
    }

    element.set_data("set", "10|90");
    if hook.updated() {
        let slider = hook.slider_mut();
        if let Some(deadline) = slider.pending_deadline() {
            tokio::time::sleep_until(deadline.into()).await;
            slider.poll();
        }
    }
    info!(view = ?hook.slider().view(), "after update");

    hook.destroyed();
    info!(display = %element.display(), "destroyed");
}
