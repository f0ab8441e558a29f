//! The slider facade: lifecycle and public control surface.
//!
//! ## Usage
//!
//! Construct a [`Slider`] against a host document, report track metrics
//! with [`Slider::measure`] and [`Slider::resize`], route pointer input to
//! [`Slider::handle_pointer`] and call [`Slider::poll`] from the host loop
//! so settled changes reach the configured handler.

use std::time::Instant;

use tracing::{debug, info, trace};

use crate::{
    config::SliderConfig,
    domain::ValueDomain,
    drag::{DragController, DragState},
    error::SliderError,
    geometry::{Geometry, TrackMetrics},
    host::{HostAttachment, HostDocument},
    notifier::ChangeNotifier,
    pointer::{PointerEvent, PointerEventContent, PointerTarget},
    px::{Px, PxPosition},
    scale::{Tick, render_scale},
    selection::{Handle, SelectionState},
    value::{DomainValue, SliderValue},
    view::{SliderView, ViewInput, build_view, hit_test},
};

/// A discrete slider bound to a host form element.
pub struct Slider {
    config: SliderConfig,
    domain: ValueDomain,
    geometry: Geometry,
    selection: SelectionState,
    drag: DragController,
    ticks: Vec<Tick>,
    notifier: ChangeNotifier,
    host: HostAttachment,
    disabled: bool,
}

impl Slider {
    /// Builds the slider and attaches it to its host element.
    ///
    /// Fails with [`SliderError::TargetNotFound`] when the target cannot be
    /// resolved and with [`SliderError::InvalidDomain`] when the values do
    /// not form a domain. The host is left untouched on failure.
    pub fn new(config: SliderConfig, document: &dyn HostDocument) -> Result<Self, SliderError> {
        let element = config.target.resolve(document)?;
        let domain = ValueDomain::from_source(&config.values, config.step)?;
        let selection = SelectionState::initial(&domain, config.range, &config.set);
        let ticks = render_scale(&domain, config.scale_options());
        let notifier = ChangeNotifier::new(config.on_change.clone());
        let host = HostAttachment::attach(element);

        let slider = Self {
            geometry: Geometry::unmeasured(domain.len()),
            disabled: config.disabled,
            config,
            domain,
            selection,
            drag: DragController::new(),
            ticks,
            notifier,
            host,
        };
        slider.mirror();
        info!(
            host = ?slider.config.target,
            values = slider.domain.len(),
            range = slider.config.range,
            value = %slider.value(),
            "slider mounted"
        );
        Ok(slider)
    }

    /// Applies a layout measurement.
    pub fn measure(&mut self, metrics: TrackMetrics) {
        self.geometry = Geometry::measure(metrics, self.domain.len(), self.config.width);
        self.ticks = render_scale(&self.domain, self.config.scale_options());
        trace!(
            left = self.geometry.track_left().raw(),
            width = self.geometry.track_width().raw(),
            step_px = self.geometry.step_px(),
            "slider measured"
        );
    }

    /// Re-measures after the host reports a layout change.
    pub fn resize(&mut self, metrics: TrackMetrics) {
        debug!(?metrics, "slider resized");
        self.measure(metrics);
    }

    /// Routes one pointer event. Returns whether the selection changed.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        let PointerEvent {
            timestamp,
            pointer_id,
            position,
            content,
        } = event;
        match content {
            PointerEventContent::Down(PointerTarget::Handle(handle)) => {
                if handle == Handle::End && !self.config.range {
                    return false;
                }
                if self.drag.press(handle, pointer_id, self.disabled) {
                    debug!(?handle, pointer_id, "drag started");
                }
                false
            }
            PointerEventContent::Move => {
                let changed = self.drag.drag_to(
                    pointer_id,
                    position.x,
                    &self.geometry,
                    &mut self.selection,
                );
                if changed {
                    self.commit(timestamp);
                }
                changed
            }
            PointerEventContent::Up | PointerEventContent::Cancel => {
                if self.drag.release(pointer_id) {
                    debug!(pointer_id, value = %self.value(), "drag ended");
                }
                false
            }
            PointerEventContent::Click(PointerTarget::Scale) => self.jump(position.x, timestamp),
            PointerEventContent::Down(_) | PointerEventContent::Click(_) => false,
        }
    }

    /// Finds the slider part under `position`.
    pub fn hit_test(&self, position: PxPosition) -> PointerTarget {
        hit_test(position, &self.geometry, &self.selection, self.config.scale)
    }

    /// Enables or disables interaction. Disabling ends any active drag.
    pub fn disable(&mut self, disabled: bool) {
        if disabled && self.drag.cancel() {
            debug!("drag cancelled by disable");
        }
        self.disabled = disabled;
    }

    /// Whether interaction is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// The resolved selection; its `Display` output is the serialized form.
    pub fn value(&self) -> SliderValue {
        self.selection.resolve(&self.domain)
    }

    /// The value currently mirrored into the host element.
    pub fn host_value(&self) -> String {
        self.host.value()
    }

    /// Re-selects by value, now. See [`Slider::set_values_at`].
    pub fn set_values(&mut self, values: &[DomainValue]) -> bool {
        self.set_values_at(values, Instant::now())
    }

    /// Re-selects by value. Values missing from the domain are skipped;
    /// an unchanged selection schedules no notification. Works while
    /// disabled. Returns whether the selection changed.
    pub fn set_values_at(&mut self, values: &[DomainValue], now: Instant) -> bool {
        let changed = self.selection.set_programmatic(&self.domain, values);
        if changed {
            debug!(value = %self.value(), "selection set programmatically");
            self.commit(now);
        }
        changed
    }

    /// Delivers a settled change if one is due. See [`Slider::poll_at`].
    pub fn poll(&mut self) -> Option<SliderValue> {
        self.poll_at(Instant::now())
    }

    /// Delivers a settled change if its debounce window passed by `now`.
    pub fn poll_at(&mut self, now: Instant) -> Option<SliderValue> {
        self.notifier.poll(now)
    }

    /// When the next notification is due, so hosts can schedule a wake-up.
    pub fn pending_deadline(&self) -> Option<Instant> {
        self.notifier.pending_deadline()
    }

    /// Snapshot of the visual state.
    pub fn view(&self) -> SliderView {
        build_view(ViewInput {
            domain: &self.domain,
            geometry: &self.geometry,
            selection: &self.selection,
            ticks: &self.ticks,
            tooltip: self.config.tooltip,
            sliding: self.drag.is_dragging(),
            disabled: self.disabled,
        })
    }

    /// The value domain.
    pub fn domain(&self) -> &ValueDomain {
        &self.domain
    }

    /// The selected indices.
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// The current measurement.
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// The drag session state.
    pub fn drag_state(&self) -> DragState {
        self.drag.state()
    }

    /// The scale ticks from the last measurement.
    pub fn ticks(&self) -> &[Tick] {
        &self.ticks
    }

    /// The construction options.
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Detaches from the host: drops the drag session and any pending
    /// notification, then restores the host element's display.
    pub fn destroy(mut self) {
        self.drag.cancel();
        if self.notifier.cancel() {
            debug!("pending change dropped on destroy");
        }
        info!(host = ?self.config.target, "slider destroyed");
        self.host.detach();
    }

    fn jump(&mut self, x: Px, now: Instant) -> bool {
        if self.disabled || !self.config.scale {
            return false;
        }
        let Some(index) = self.geometry.pixel_to_index(x) else {
            return false;
        };
        let before = self.selection;
        let handle = self.selection.set_from_jump(index);
        let changed = self.selection != before;
        if changed {
            debug!(?handle, index, "jumped to scale position");
            self.commit(now);
        }
        changed
    }

    fn mirror(&self) {
        self.host.mirror(&self.value().to_string());
    }

    fn commit(&mut self, now: Instant) {
        self.mirror();
        self.notifier.schedule(self.value(), now);
    }
}

impl std::fmt::Debug for Slider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slider")
            .field("target", &self.config.target)
            .field("domain", &self.domain)
            .field("selection", &self.selection)
            .field("drag", &self.drag)
            .field("disabled", &self.disabled)
            .finish_non_exhaustive()
    }
}
