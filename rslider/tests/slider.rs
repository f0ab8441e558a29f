mod common;

use std::time::{Duration, Instant};

use common::{Changes, TestPage, event};
use rslider::{
    DEBOUNCE_WINDOW, DomainError, DomainValue, DragState, Handle, HostElement, PointerEventContent,
    PointerTarget, PxPosition, Slider, SliderConfigBuilder, SliderError, SliderValue, TrackMetrics,
};

fn numbers(values: &[i32]) -> Vec<DomainValue> {
    values.iter().copied().map(DomainValue::from).collect()
}

fn press(handle: Handle) -> PointerEventContent {
    PointerEventContent::Down(PointerTarget::Handle(handle))
}

#[test]
fn dragging_single_handle_selects_nearest_index() {
    let (page, field) = TestPage::with_field("#volume");
    let config = SliderConfigBuilder::default()
        .target("#volume")
        .values(0.0..=10.0)
        .build()
        .unwrap();
    let mut slider = Slider::new(config, &page).unwrap();
    slider.measure(TrackMetrics::new(0, 500, 20));
    let t0 = Instant::now();

    assert_eq!(
        slider.hit_test(PxPosition::from_x(5)),
        PointerTarget::Handle(Handle::Start)
    );
    assert!(!slider.handle_pointer(event(t0, 1, 0, press(Handle::Start))));
    assert!(slider.view().sliding);
    assert!(slider.handle_pointer(event(t0, 1, 340, PointerEventContent::Move)));
    assert!(!slider.handle_pointer(event(t0, 1, 340, PointerEventContent::Up)));

    assert_eq!(slider.value(), SliderValue::Single(DomainValue::from(7)));
    assert_eq!(field.value(), "7");
    assert_eq!(slider.drag_state(), DragState::Idle);
}

#[test]
fn initial_range_serializes_low_then_high() {
    let (page, field) = TestPage::with_field("#price");
    let config = SliderConfigBuilder::default()
        .target("#price")
        .values(numbers(&[10, 20, 30, 40, 50]))
        .range(true)
        .set(numbers(&[20, 40]))
        .build()
        .unwrap();
    let slider = Slider::new(config, &page).unwrap();

    assert_eq!(slider.value().to_string(), "20,40");
    assert_eq!(slider.host_value(), "20,40");
    assert_eq!(field.display(), "none");
}

#[test]
fn dragging_high_handle_past_low_reorders_endpoints() {
    let (page, _field) = TestPage::with_field("#price");
    let config = SliderConfigBuilder::default()
        .target("#price")
        .values(numbers(&[10, 20, 30, 40, 50]))
        .range(true)
        .set(numbers(&[20, 40]))
        .build()
        .unwrap();
    let mut slider = Slider::new(config, &page).unwrap();
    slider.measure(TrackMetrics::new(0, 400, 20));
    let t0 = Instant::now();
    let dragging_end = DragState::Dragging {
        handle: Handle::End,
        pointer_id: 1,
    };

    slider.handle_pointer(event(t0, 1, 300, press(Handle::End)));
    assert!(slider.handle_pointer(event(t0, 1, 0, PointerEventContent::Move)));
    assert_eq!(
        (slider.selection().start(), slider.selection().end()),
        (0, 1)
    );
    assert_eq!(slider.value().to_string(), "10,20");
    assert_eq!(slider.drag_state(), dragging_end);

    assert!(slider.handle_pointer(event(t0, 1, 200, PointerEventContent::Move)));
    assert_eq!(slider.value().to_string(), "10,30");
    assert_eq!(slider.drag_state(), dragging_end);
}

#[test]
fn stepped_bounds_stop_at_last_value_below_max() {
    let (page, _field) = TestPage::with_field("#s");
    let config = SliderConfigBuilder::default()
        .target("#s")
        .values(0.0..=10.0)
        .step(3.0)
        .build()
        .unwrap();
    let slider = Slider::new(config, &page).unwrap();
    let rendered: Vec<String> = slider
        .domain()
        .values()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(rendered, ["0", "3", "6", "9"]);
}

#[test]
fn scale_click_midway_moves_start() {
    let (page, _field) = TestPage::with_field("#r");
    let config = SliderConfigBuilder::default()
        .target("#r")
        .values(0.0..=4.0)
        .range(true)
        .set(numbers(&[1, 3]))
        .build()
        .unwrap();
    let mut slider = Slider::new(config, &page).unwrap();
    slider.measure(TrackMetrics::new(0, 400, 20));

    assert_eq!(slider.hit_test(PxPosition::from_x(200)), PointerTarget::Scale);
    let click = PointerEventContent::Click(PointerTarget::Scale);
    assert!(slider.handle_pointer(event(Instant::now(), 1, 200, click)));
    assert_eq!(
        (slider.selection().start(), slider.selection().end()),
        (2, 3)
    );
}

#[test]
fn scale_click_is_ignored_without_scale() {
    let (page, _field) = TestPage::with_field("#r");
    let config = SliderConfigBuilder::default()
        .target("#r")
        .values(0.0..=4.0)
        .scale(false)
        .build()
        .unwrap();
    let mut slider = Slider::new(config, &page).unwrap();
    slider.measure(TrackMetrics::new(0, 400, 20));

    assert_eq!(slider.hit_test(PxPosition::from_x(200)), PointerTarget::Track);
    let click = PointerEventContent::Click(PointerTarget::Scale);
    assert!(!slider.handle_pointer(event(Instant::now(), 1, 200, click)));
    assert!(slider.view().ticks.is_empty());
}

#[test]
fn rapid_changes_notify_once_after_quiet_period() {
    let (page, _field) = TestPage::with_field("#v");
    let changes = Changes::default();
    let config = SliderConfigBuilder::default()
        .target("#v")
        .values(0.0..=10.0)
        .on_change(changes.callback())
        .build()
        .unwrap();
    let mut slider = Slider::new(config, &page).unwrap();
    slider.measure(TrackMetrics::new(0, 500, 20));
    let t0 = Instant::now();

    assert_eq!(slider.poll_at(t0 + Duration::from_secs(5)), None);

    slider.handle_pointer(event(t0, 1, 0, press(Handle::Start)));
    for (ms, x) in [(0, 50), (100, 150), (200, 250)] {
        let at = t0 + Duration::from_millis(ms);
        assert!(slider.handle_pointer(event(at, 1, x, PointerEventContent::Move)));
        assert_eq!(slider.poll_at(at), None);
    }
    let last = t0 + Duration::from_millis(200);
    assert_eq!(slider.pending_deadline(), Some(last + DEBOUNCE_WINDOW));
    assert_eq!(slider.poll_at(last + Duration::from_millis(299)), None);

    let settled = SliderValue::Single(DomainValue::from(5));
    assert_eq!(slider.poll_at(last + DEBOUNCE_WINDOW), Some(settled.clone()));
    assert_eq!(changes.seen(), vec![settled]);
    assert_eq!(slider.poll_at(last + Duration::from_secs(5)), None);
}

#[test]
fn setting_current_values_schedules_nothing() {
    let (page, _field) = TestPage::with_field("#price");
    let config = SliderConfigBuilder::default()
        .target("#price")
        .values(numbers(&[10, 20, 30, 40, 50]))
        .range(true)
        .set(numbers(&[20, 40]))
        .build()
        .unwrap();
    let mut slider = Slider::new(config, &page).unwrap();
    let t0 = Instant::now();

    assert!(!slider.set_values_at(&numbers(&[20, 40]), t0));
    assert_eq!(slider.pending_deadline(), None);

    assert!(slider.set_values_at(&numbers(&[50, 10]), t0));
    assert_eq!(slider.value().to_string(), "10,50");
    assert!(!slider.set_values_at(&numbers(&[10, 50]), t0));
}

#[test]
fn unmatched_values_are_skipped() {
    let (page, _field) = TestPage::with_field("#price");
    let config = SliderConfigBuilder::default()
        .target("#price")
        .values(numbers(&[10, 20, 30, 40, 50]))
        .range(true)
        .set(numbers(&[25, 40]))
        .build()
        .unwrap();
    let mut slider = Slider::new(config, &page).unwrap();
    assert_eq!(slider.value().to_string(), "10,40");

    assert!(!slider.set_values(&[DomainValue::from("nope")]));
    assert_eq!(slider.value().to_string(), "10,40");
}

#[test]
fn disabled_slider_ignores_pointer_but_accepts_values() {
    let (page, field) = TestPage::with_field("#v");
    let config = SliderConfigBuilder::default()
        .target("#v")
        .values(0.0..=10.0)
        .disabled(true)
        .build()
        .unwrap();
    let mut slider = Slider::new(config, &page).unwrap();
    slider.measure(TrackMetrics::new(0, 500, 20));
    let t0 = Instant::now();

    slider.handle_pointer(event(t0, 1, 0, press(Handle::Start)));
    assert_eq!(slider.drag_state(), DragState::Idle);
    assert!(!slider.handle_pointer(event(t0, 1, 300, PointerEventContent::Move)));
    let click = PointerEventContent::Click(PointerTarget::Scale);
    assert!(!slider.handle_pointer(event(t0, 1, 300, click)));
    assert!(slider.view().disabled);

    assert!(slider.set_values(&numbers(&[4])));
    assert_eq!(field.value(), "4");
}

#[test]
fn disabling_mid_drag_ends_the_session() {
    let (page, _field) = TestPage::with_field("#v");
    let config = SliderConfigBuilder::default()
        .target("#v")
        .values(0.0..=10.0)
        .build()
        .unwrap();
    let mut slider = Slider::new(config, &page).unwrap();
    slider.measure(TrackMetrics::new(0, 500, 20));
    let t0 = Instant::now();

    slider.handle_pointer(event(t0, 1, 0, press(Handle::Start)));
    assert!(slider.handle_pointer(event(t0, 1, 100, PointerEventContent::Move)));
    slider.disable(true);
    assert!(slider.is_disabled());
    assert_eq!(slider.drag_state(), DragState::Idle);
    assert!(!slider.handle_pointer(event(t0, 1, 400, PointerEventContent::Move)));
    assert_eq!(slider.value().to_string(), "2");

    slider.disable(false);
    slider.handle_pointer(event(t0, 1, 100, press(Handle::Start)));
    assert!(slider.handle_pointer(event(t0, 1, 400, PointerEventContent::Move)));
    assert_eq!(slider.value().to_string(), "8");
}

#[test]
fn only_the_capturing_pointer_drives_the_drag() {
    let (page, _field) = TestPage::with_field("#r");
    let config = SliderConfigBuilder::default()
        .target("#r")
        .values(0.0..=10.0)
        .range(true)
        .build()
        .unwrap();
    let mut slider = Slider::new(config, &page).unwrap();
    slider.measure(TrackMetrics::new(0, 500, 20));
    let t0 = Instant::now();

    slider.handle_pointer(event(t0, 1, 0, press(Handle::Start)));
    slider.handle_pointer(event(t0, 2, 500, press(Handle::End)));
    assert_eq!(
        slider.drag_state(),
        DragState::Dragging {
            handle: Handle::Start,
            pointer_id: 1
        }
    );
    assert!(!slider.handle_pointer(event(t0, 2, 200, PointerEventContent::Move)));
    slider.handle_pointer(event(t0, 2, 200, PointerEventContent::Up));
    assert!(slider.view().sliding);

    assert!(slider.handle_pointer(event(t0, 1, 200, PointerEventContent::Move)));
    slider.handle_pointer(event(t0, 1, 200, PointerEventContent::Cancel));
    assert_eq!(slider.drag_state(), DragState::Idle);
    assert_eq!(slider.value().to_string(), "4,10");
}

#[test]
fn single_mode_has_no_high_handle() {
    let (page, _field) = TestPage::with_field("#v");
    let config = SliderConfigBuilder::default()
        .target("#v")
        .values(0.0..=10.0)
        .build()
        .unwrap();
    let mut slider = Slider::new(config, &page).unwrap();
    slider.measure(TrackMetrics::new(0, 500, 20));

    slider.handle_pointer(event(Instant::now(), 1, 0, press(Handle::End)));
    assert_eq!(slider.drag_state(), DragState::Idle);
    assert!(slider.view().end_handle.is_none());
}

#[test]
fn unmeasured_slider_ignores_moves() {
    let (page, _field) = TestPage::with_field("#v");
    let config = SliderConfigBuilder::default()
        .target("#v")
        .values(0.0..=10.0)
        .build()
        .unwrap();
    let mut slider = Slider::new(config, &page).unwrap();
    let t0 = Instant::now();

    slider.handle_pointer(event(t0, 1, 0, press(Handle::Start)));
    assert!(!slider.handle_pointer(event(t0, 1, 300, PointerEventContent::Move)));

    slider.resize(TrackMetrics::new(0, 500, 20));
    assert!(slider.handle_pointer(event(t0, 1, 300, PointerEventContent::Move)));
    assert_eq!(slider.value().to_string(), "6");
}

#[test]
fn width_override_replaces_measured_width() {
    let (page, _field) = TestPage::with_field("#v");
    let config = SliderConfigBuilder::default()
        .target("#v")
        .values(0.0..=10.0)
        .width(1000)
        .build()
        .unwrap();
    let mut slider = Slider::new(config, &page).unwrap();
    slider.measure(TrackMetrics::new(0, 500, 20));
    assert_eq!(slider.geometry().step_px(), 100.0);
    assert_eq!(slider.view().track_width.raw(), 1000);
}

#[test]
fn destroy_restores_host_and_drops_pending_change() {
    let (page, field) = TestPage::with_field("#v");
    let changes = Changes::default();
    let config = SliderConfigBuilder::default()
        .target("#v")
        .values(0.0..=10.0)
        .on_change(changes.callback())
        .build()
        .unwrap();
    let mut slider = Slider::new(config, &page).unwrap();
    assert_eq!(field.display(), "none");

    assert!(slider.set_values(&numbers(&[3])));
    assert!(slider.pending_deadline().is_some());
    slider.destroy();

    assert_eq!(field.display(), "block");
    assert_eq!(field.value(), "3");
    assert!(changes.seen().is_empty());
}

#[test]
fn missing_target_is_reported() {
    let (page, _field) = TestPage::with_field("#v");
    let config = SliderConfigBuilder::default()
        .target("#missing")
        .values(0.0..=10.0)
        .build()
        .unwrap();
    assert_eq!(
        Slider::new(config, &page).unwrap_err(),
        SliderError::TargetNotFound("#missing".to_owned())
    );
}

#[test]
fn invalid_domain_leaves_host_untouched() {
    let (page, field) = TestPage::with_field("#v");
    let config = SliderConfigBuilder::default()
        .target("#v")
        .values(numbers(&[1]))
        .build()
        .unwrap();
    assert_eq!(
        Slider::new(config, &page).unwrap_err(),
        SliderError::InvalidDomain(DomainError::TooFewValues(1))
    );
    assert_eq!(field.display(), "block");
    assert_eq!(field.value(), "");
}
