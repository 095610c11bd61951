use crate::core::actions::cancellation::CancellationFlag;
use crate::core::data::settings::Settings;
use crate::core::data::surface_size::SurfaceSize;
use log::debug;
use std::cell::{Cell, RefCell};
use std::num::NonZeroU32;
use std::rc::Rc;

/// State shared between the control panel, the resize notifier and the refinement loop.
///
/// Everything lives on the render thread, so interior mutability replaces locking.
/// Every settings update and resize raises the cancellation flag and then runs the
/// registered change listeners, in registration order.
pub struct RenderContext {
    settings: Cell<Settings>,
    surface: Cell<SurfaceSize>,
    cancellation: CancellationFlag,
    listeners: RefCell<Vec<Box<dyn Fn()>>>,
}

impl RenderContext {
    #[must_use]
    pub fn new(surface: SurfaceSize) -> Rc<Self> {
        Self::with_settings(surface, Settings::for_surface(surface))
    }

    #[must_use]
    pub fn with_settings(surface: SurfaceSize, settings: Settings) -> Rc<Self> {
        Rc::new(Self {
            settings: Cell::new(settings.clamped()),
            surface: Cell::new(surface),
            cancellation: CancellationFlag::new(),
            listeners: RefCell::new(Vec::new()),
        })
    }

    #[must_use]
    pub fn settings(&self) -> Settings {
        self.settings.get()
    }

    #[must_use]
    pub fn surface(&self) -> SurfaceSize {
        self.surface.get()
    }

    #[must_use]
    pub fn cancellation(&self) -> &CancellationFlag {
        &self.cancellation
    }

    /// Registers a change listener. Listeners must not register further listeners.
    pub fn on_change(&self, listener: impl Fn() + 'static) {
        self.listeners.borrow_mut().push(Box::new(listener));
    }

    pub fn update_settings(&self, update: impl FnOnce(&mut Settings)) {
        let mut settings = self.settings.get();
        update(&mut settings);
        let settings = settings.clamped();

        debug!("settings changed: {:?}", settings);

        self.settings.set(settings);
        self.notify_change();
    }

    pub fn resize(&self, surface: SurfaceSize) {
        debug!(
            "surface resized to {}x{}",
            surface.width(),
            surface.height()
        );

        self.surface.set(surface);
        self.notify_change();
    }

    /// Mirrors the stride being rendered into the settings without counting as a change.
    pub(crate) fn record_detail(&self, detail: NonZeroU32) {
        let mut settings = self.settings.get();
        settings.detail = f64::from(detail.get());
        self.settings.set(settings);
    }

    fn notify_change(&self) {
        self.cancellation.request();

        for listener in self.listeners.borrow().iter() {
            listener();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> Rc<RenderContext> {
        RenderContext::new(SurfaceSize::new(600, 400).unwrap())
    }

    #[test]
    fn test_new_uses_defaults_for_surface() {
        let context = context();

        assert_eq!(
            context.settings(),
            Settings::for_surface(SurfaceSize::new(600, 400).unwrap())
        );
        assert!(!context.cancellation().is_requested());
    }

    #[test]
    fn test_update_settings_applies_clamps_and_cancels() {
        let context = context();

        context.update_settings(|settings| {
            settings.iterations = 80;
            settings.scale = -10.0;
        });

        assert_eq!(context.settings().iterations, 80);
        assert_eq!(context.settings().scale, -4.0);
        assert!(context.cancellation().is_requested());
    }

    #[test]
    fn test_listeners_run_on_every_change() {
        let context = context();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        context.on_change(move || counter.set(counter.get() + 1));

        context.update_settings(|settings| settings.tolerance = -1.0);
        context.resize(SurfaceSize::new(300, 300).unwrap());

        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_listeners_see_the_new_state() {
        let context = context();
        let seen = Rc::new(Cell::new(None));
        let observer = Rc::clone(&seen);
        let weak = Rc::downgrade(&context);
        context.on_change(move || {
            if let Some(context) = weak.upgrade() {
                observer.set(Some((context.settings().scale, context.cancellation().is_requested())));
            }
        });

        context.update_settings(|settings| settings.scale = -3.0);

        assert_eq!(seen.get(), Some((-3.0, true)));
    }

    #[test]
    fn test_resize_updates_surface_and_cancels() {
        let context = context();
        let size = SurfaceSize::new(1024, 768).unwrap();

        context.resize(size);

        assert_eq!(context.surface(), size);
        assert!(context.cancellation().is_requested());
    }

    #[test]
    fn test_resize_keeps_center() {
        let context = context();

        context.resize(SurfaceSize::new(1024, 768).unwrap());

        assert_eq!(context.settings().center_x, 300.0);
        assert_eq!(context.settings().center_y, 200.0);
    }

    #[test]
    fn test_record_detail_is_not_a_change() {
        let context = context();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        context.on_change(move || counter.set(counter.get() + 1));

        context.record_detail(NonZeroU32::new(7).unwrap());

        assert_eq!(context.settings().detail, 7.0);
        assert_eq!(calls.get(), 0);
        assert!(!context.cancellation().is_requested());
    }
}
