//! Top-level controller
//!
//! Owns the settings, the settings store, the temperature source and the
//! actuators, and advances the active mode once per input tick:
//!
//! ```text
//!            click / long press            confirm
//!   Menu ───────────────────────▶ Editing ─────────▶ Menu
//!     │
//!     │ long press on Start Timer          expiry / long press
//!     └───────────────────────────▶ Running ─────────────────▶ Menu
//! ```
//!
//! Heater and cleaner are forced off whenever a run ends, however it ends.

use usonic_display::DrawSurface;
use usonic_hal::EepromStorage;

use crate::actuator::{Activity, Actuator, ActuatorController};
use crate::config::ControllerConfig;
use crate::editor::{
    ContrastAdjuster, EditOutcome, Editor, NetworkPlaceholder, TemperatureEditor, TimerPicker,
};
use crate::error::Error;
use crate::input::{InputEvent, TickEvents};
use crate::run::{select_activity, RunPhase, TimedRun};
use crate::settings::Settings;
use crate::state::MenuItem;
use crate::traits::{BinaryOutput, SensorError, TemperatureSource};
use crate::ui;

/// Active controller mode
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Browsing the menu
    Menu,
    /// A submenu is open
    Editing(Editor),
    /// A timed run is in progress
    Running(TimedRun),
}

/// The cleaner controller
pub struct Controller<S, T, H, C, B> {
    config: ControllerConfig,
    mode: Mode,
    /// Menu selection, kept while a submenu or run is active
    selected: MenuItem,
    settings: Settings,
    store: S,
    sensor: T,
    actuators: ActuatorController<H, C, B>,
}

impl<S, T, H, C, B> Controller<S, T, H, C, B>
where
    S: EepromStorage,
    T: TemperatureSource,
    H: BinaryOutput,
    C: BinaryOutput,
    B: BinaryOutput,
{
    /// Build the controller, loading settings from the store
    ///
    /// Starts in the menu on Start Timer with the backlight on.
    pub fn new(
        config: ControllerConfig,
        store: S,
        sensor: T,
        actuators: ActuatorController<H, C, B>,
    ) -> Self {
        let settings = Settings::load_or_default(&store);
        let mut actuators = actuators;
        actuators.all_off();
        actuators.turn_on(Actuator::Backlight);

        #[cfg(feature = "defmt")]
        defmt::info!("Controller ready: {}", settings);

        Self {
            config,
            mode: Mode::Menu,
            selected: MenuItem::StartTimer,
            settings,
            store,
            sensor,
            actuators,
        }
    }

    /// Current mode
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Selected menu item
    pub fn selected(&self) -> MenuItem {
        self.selected
    }

    /// Settings in effect
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Controller configuration
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Actuator outputs
    pub fn actuators(&self) -> &ActuatorController<H, C, B> {
        &self.actuators
    }

    /// Settings store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Temperature source
    pub fn sensor_mut(&mut self) -> &mut T {
        &mut self.sensor
    }

    /// Advance one tick
    ///
    /// Consumes this tick's input events, updates a running countdown and
    /// redraws the screen. Every state change of the tick is made before an
    /// error is returned; when several collaborators fail, the first error
    /// is reported.
    pub fn step<D: DrawSurface + ?Sized>(
        &mut self,
        now_ms: u64,
        events: TickEvents,
        surface: &mut D,
    ) -> Result<(), Error> {
        let mut result = Ok(());

        for event in events.iter() {
            keep_first(&mut result, self.handle_event(now_ms, event));
        }
        keep_first(&mut result, self.update_run(now_ms));
        keep_first(&mut result, self.render(now_ms, surface));

        result
    }

    fn handle_event(&mut self, now_ms: u64, event: InputEvent) -> Result<(), Error> {
        match &mut self.mode {
            Mode::Menu => {
                self.handle_menu_event(now_ms, event);
                Ok(())
            }
            Mode::Editing(editor) => match editor.handle(event) {
                EditOutcome::Continue => Ok(()),
                EditOutcome::Commit => self.commit_edit(),
            },
            Mode::Running(_) => {
                if let InputEvent::LongPress(_) = event {
                    #[cfg(feature = "defmt")]
                    defmt::info!("Run cancelled");
                    self.end_run();
                }
                Ok(())
            }
        }
    }

    fn handle_menu_event(&mut self, now_ms: u64, event: InputEvent) {
        match (self.selected, event) {
            (_, InputEvent::Down) => self.selected = self.selected.next(),
            (_, InputEvent::Up) => self.selected = self.selected.prev(),

            (MenuItem::StartTimer, InputEvent::Click) => {}
            (MenuItem::StartTimer, InputEvent::LongPress(_)) => self.start_run(now_ms),

            (_, InputEvent::LongPress(_)) => {
                let _on = self.actuators.toggle_backlight();
                #[cfg(feature = "defmt")]
                defmt::debug!("Backlight {}", _on);
            }
            (item, InputEvent::Click) => self.mode = Mode::Editing(self.open_editor(item)),
        }
    }

    fn open_editor(&self, item: MenuItem) -> Editor {
        match item {
            MenuItem::SetTimer => Editor::Timer(TimerPicker::new(self.settings.timer_minutes)),
            MenuItem::SetTemperature => {
                Editor::Temperature(TemperatureEditor::new(self.settings.set_temperature_f))
            }
            MenuItem::Contrast => Editor::Contrast(ContrastAdjuster::new(self.settings.contrast)),
            MenuItem::Network | MenuItem::StartTimer => Editor::Network(NetworkPlaceholder),
        }
    }

    /// Write the open editor into the settings, persist, and return to the menu
    fn commit_edit(&mut self) -> Result<(), Error> {
        let mode = core::mem::replace(&mut self.mode, Mode::Menu);
        let Mode::Editing(editor) = mode else {
            self.mode = mode;
            return Ok(());
        };

        editor.apply(&mut self.settings);
        match self.settings.save(&mut self.store) {
            Ok(()) => {
                #[cfg(feature = "defmt")]
                defmt::info!("Settings saved: {}", self.settings);
                Ok(())
            }
            Err(e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Settings save failed: {}", e);
                Err(e.into())
            }
        }
    }

    fn start_run(&mut self, now_ms: u64) {
        #[cfg(feature = "defmt")]
        defmt::info!(
            "Run started: {} min, target {}F",
            self.settings.timer_minutes,
            self.settings.set_temperature_f
        );
        self.sensor.restart();
        self.mode = Mode::Running(TimedRun::new(now_ms, self.settings.timer_minutes));
    }

    /// Leave a run; heater and cleaner are always switched off
    fn end_run(&mut self) {
        self.actuators.all_off();
        self.mode = Mode::Menu;
    }

    fn update_run(&mut self, now_ms: u64) -> Result<(), Error> {
        let Mode::Running(run) = &mut self.mode else {
            return Ok(());
        };

        if run.phase(now_ms) == RunPhase::Done {
            #[cfg(feature = "defmt")]
            defmt::info!("Run complete");
            self.end_run();
            return Ok(());
        }

        match self.sensor.read_fahrenheit_x10() {
            Ok(temp_x10) => {
                let activity = select_activity(
                    temp_x10,
                    self.settings.set_temperature_f,
                    self.config.temp_offset_f,
                );
                if activity != run.activity() {
                    #[cfg(feature = "defmt")]
                    defmt::info!("{} at {} (x0.1F)", activity, temp_x10);
                }
                self.actuators.apply(activity);
                run.record(Some(temp_x10), activity);
                Ok(())
            }
            Err(SensorError::NotReady) => {
                // First measurement of the run still converting
                self.actuators.apply(Activity::Idle);
                run.record(None, Activity::Idle);
                Ok(())
            }
            Err(e) => {
                // Hold both elements off until the sensor recovers
                self.actuators.apply(Activity::Idle);
                run.record(None, Activity::Idle);
                Err(e.into())
            }
        }
    }

    fn render<D: DrawSurface + ?Sized>(&self, now_ms: u64, surface: &mut D) -> Result<(), Error> {
        match &self.mode {
            Mode::Menu => ui::draw_menu(surface, self.selected)?,
            Mode::Editing(Editor::Timer(picker)) => ui::draw_timer(surface, picker)?,
            Mode::Editing(Editor::Temperature(editor)) => ui::draw_temperature(surface, editor)?,
            Mode::Editing(Editor::Contrast(adjuster)) => {
                surface.set_contrast(adjuster.value())?;
                ui::draw_contrast(surface, adjuster.value())?;
            }
            Mode::Editing(Editor::Network(_)) => ui::draw_network(surface)?,
            Mode::Running(run) => ui::draw_run(
                surface,
                run.remaining_seconds(now_ms),
                run.temperature_x10(),
                self.settings.set_temperature_f,
            )?,
        }
        Ok(())
    }
}

fn keep_first(result: &mut Result<(), Error>, next: Result<(), Error>) {
    if result.is_ok() {
        *result = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actuator::tests::MockOutput;
    use crate::actuator::ActuatorState;
    use crate::settings::tests::MemStore;
    use usonic_display::{DisplayError, TextCanvas};
    use usonic_hal::StorageError;

    struct MockSensor {
        temp_x10: Result<i16, SensorError>,
        reads: u32,
        restarts: u32,
    }

    impl TemperatureSource for MockSensor {
        fn read_fahrenheit_x10(&mut self) -> Result<i16, SensorError> {
            self.reads += 1;
            self.temp_x10
        }

        fn restart(&mut self) {
            self.restarts += 1;
        }
    }

    type TestController =
        Controller<MemStore, MockSensor, MockOutput<'static>, MockOutput<'static>, MockOutput<'static>>;

    fn controller_with(store: MemStore) -> TestController {
        let actuators = ActuatorController::new(
            MockOutput::new(Actuator::Heater),
            MockOutput::new(Actuator::Cleaner),
            MockOutput::new(Actuator::Backlight),
        );
        let sensor = MockSensor {
            temp_x10: Ok(700),
            reads: 0,
            restarts: 0,
        };
        Controller::new(ControllerConfig::default(), store, sensor, actuators)
    }

    fn controller() -> TestController {
        controller_with(MemStore::new())
    }

    fn press(
        controller: &mut TestController,
        canvas: &mut TextCanvas,
        now_ms: u64,
        event: InputEvent,
    ) -> Result<(), Error> {
        controller.step(now_ms, TickEvents::single(event), canvas)
    }

    #[test]
    fn test_boot_state() {
        let controller = controller();
        assert_eq!(controller.mode(), &Mode::Menu);
        assert_eq!(controller.selected(), MenuItem::StartTimer);
        assert!(controller.actuators().is_on(Actuator::Backlight));
        assert_eq!(controller.actuators().state(), ActuatorState::default());
    }

    #[test]
    fn test_menu_navigation_and_render() {
        let mut controller = controller();
        let mut canvas = TextCanvas::new();

        press(&mut controller, &mut canvas, 0, InputEvent::Up).unwrap();
        assert_eq!(controller.selected(), MenuItem::Contrast);
        assert_eq!(canvas.highlighted_row(), Some(4));

        press(&mut controller, &mut canvas, 10, InputEvent::Down).unwrap();
        press(&mut controller, &mut canvas, 20, InputEvent::Down).unwrap();
        assert_eq!(controller.selected(), MenuItem::SetTimer);
        assert_eq!(canvas.highlighted_row(), Some(1));
    }

    #[test]
    fn test_click_on_start_timer_is_noop() {
        let mut controller = controller();
        let mut canvas = TextCanvas::new();
        press(&mut controller, &mut canvas, 0, InputEvent::Click).unwrap();
        assert_eq!(controller.mode(), &Mode::Menu);
    }

    #[test]
    fn test_long_press_elsewhere_toggles_backlight() {
        let mut controller = controller();
        let mut canvas = TextCanvas::new();
        press(&mut controller, &mut canvas, 0, InputEvent::Down).unwrap();
        press(&mut controller, &mut canvas, 10, InputEvent::LongPress(1500)).unwrap();
        assert_eq!(controller.mode(), &Mode::Menu);
        assert!(!controller.actuators().is_on(Actuator::Backlight));
    }

    #[test]
    fn test_timer_pick_persists() {
        let mut controller = controller();
        let mut canvas = TextCanvas::new();

        press(&mut controller, &mut canvas, 0, InputEvent::Down).unwrap();
        press(&mut controller, &mut canvas, 10, InputEvent::Click).unwrap();
        assert!(matches!(controller.mode(), Mode::Editing(Editor::Timer(_))));
        assert!(canvas.contains("10 min"));

        press(&mut controller, &mut canvas, 20, InputEvent::Down).unwrap();
        press(&mut controller, &mut canvas, 30, InputEvent::Click).unwrap();

        assert_eq!(controller.mode(), &Mode::Menu);
        assert_eq!(controller.selected(), MenuItem::SetTimer);
        assert_eq!(controller.settings().timer_minutes, 15);
        assert_eq!(controller.store().bytes[0x08], 15);
        assert_eq!(canvas.highlighted_row(), Some(1));
    }

    #[test]
    fn test_temperature_edit_requires_long_press() {
        let mut controller = controller();
        let mut canvas = TextCanvas::new();

        press(&mut controller, &mut canvas, 0, InputEvent::Down).unwrap();
        press(&mut controller, &mut canvas, 10, InputEvent::Down).unwrap();
        press(&mut controller, &mut canvas, 20, InputEvent::Click).unwrap();
        assert_eq!(canvas.line(0), "Set Temp: 072F");

        // 072 -> 172 -> cursor to tens -> 142
        press(&mut controller, &mut canvas, 30, InputEvent::Up).unwrap();
        press(&mut controller, &mut canvas, 40, InputEvent::Click).unwrap();
        for i in 0..3 {
            press(&mut controller, &mut canvas, 50 + i * 10, InputEvent::Down).unwrap();
        }
        assert!(matches!(controller.mode(), Mode::Editing(_)));
        assert_eq!(canvas.line(0), "Set Temp: 142F");

        press(&mut controller, &mut canvas, 100, InputEvent::LongPress(1200)).unwrap();
        assert_eq!(controller.mode(), &Mode::Menu);
        assert_eq!(controller.settings().set_temperature_f, 142);
        assert_eq!(controller.store().bytes[0x00], 142);
    }

    #[test]
    fn test_contrast_applied_live() {
        let mut controller = controller();
        let mut canvas = TextCanvas::new();

        press(&mut controller, &mut canvas, 0, InputEvent::Up).unwrap();
        press(&mut controller, &mut canvas, 10, InputEvent::Click).unwrap();
        assert_eq!(canvas.contrast(), 64);

        press(&mut controller, &mut canvas, 20, InputEvent::Up).unwrap();
        assert_eq!(canvas.contrast(), 65);
        assert_eq!(controller.settings().contrast, 64);

        // Short click does not leave
        press(&mut controller, &mut canvas, 30, InputEvent::Click).unwrap();
        assert!(matches!(controller.mode(), Mode::Editing(Editor::Contrast(_))));

        press(&mut controller, &mut canvas, 40, InputEvent::LongPress(1100)).unwrap();
        assert_eq!(controller.settings().contrast, 65);
        assert_eq!(controller.store().bytes[0x10], 65);
    }

    #[test]
    fn test_network_click_saves_unchanged() {
        let mut controller = controller();
        let mut canvas = TextCanvas::new();

        for i in 0..3 {
            press(&mut controller, &mut canvas, i * 10, InputEvent::Down).unwrap();
        }
        press(&mut controller, &mut canvas, 30, InputEvent::Click).unwrap();
        assert!(canvas.contains("Not available"));

        press(&mut controller, &mut canvas, 40, InputEvent::Click).unwrap();
        assert_eq!(controller.mode(), &Mode::Menu);
        assert_eq!(controller.store().commits, 1);
        assert_eq!(controller.settings(), &Settings::default());
    }

    #[test]
    fn test_storage_failure_still_returns_to_menu() {
        let mut store = MemStore::new();
        store.fail_commit = true;
        let mut controller = controller_with(store);
        let mut canvas = TextCanvas::new();

        press(&mut controller, &mut canvas, 0, InputEvent::Down).unwrap();
        press(&mut controller, &mut canvas, 10, InputEvent::Click).unwrap();
        press(&mut controller, &mut canvas, 20, InputEvent::Down).unwrap();
        let result = press(&mut controller, &mut canvas, 30, InputEvent::Click);

        assert_eq!(result, Err(Error::Storage(StorageError::Flash)));
        assert_eq!(controller.mode(), &Mode::Menu);
        assert_eq!(controller.settings().timer_minutes, 15);
        assert_eq!(canvas.highlighted_row(), Some(1));
    }

    #[test]
    fn test_run_heats_then_expires() {
        let mut controller = controller();
        let mut canvas = TextCanvas::new();

        press(&mut controller, &mut canvas, 1_000, InputEvent::LongPress(1500)).unwrap();
        assert!(matches!(controller.mode(), Mode::Running(_)));
        // 70.0F against 72F target with a 10F band: clean
        assert_eq!(
            controller.actuators().state(),
            ActuatorState {
                heater_on: false,
                cleaner_on: true
            }
        );
        assert_eq!(canvas.line(0), "Time Left: 10:00");

        controller.sensor_mut().temp_x10 = Ok(500);
        controller.step(2_000, TickEvents::NONE, &mut canvas).unwrap();
        assert_eq!(
            controller.actuators().state(),
            ActuatorState {
                heater_on: true,
                cleaner_on: false
            }
        );
        assert_eq!(canvas.line(0), "Time Left: 9:59");

        controller.step(601_000, TickEvents::NONE, &mut canvas).unwrap();
        assert_eq!(controller.mode(), &Mode::Menu);
        assert_eq!(controller.actuators().state(), ActuatorState::default());
        assert_eq!(canvas.highlighted_row(), Some(0));
    }

    #[test]
    fn test_run_cancel_only_on_long_press() {
        let mut controller = controller();
        let mut canvas = TextCanvas::new();
        press(&mut controller, &mut canvas, 0, InputEvent::LongPress(1500)).unwrap();

        press(&mut controller, &mut canvas, 10, InputEvent::Click).unwrap();
        press(&mut controller, &mut canvas, 20, InputEvent::Down).unwrap();
        assert!(matches!(controller.mode(), Mode::Running(_)));

        press(&mut controller, &mut canvas, 30, InputEvent::LongPress(2000)).unwrap();
        assert_eq!(controller.mode(), &Mode::Menu);
        assert_eq!(controller.actuators().state(), ActuatorState::default());
        // Backlight untouched by the cancel
        assert!(controller.actuators().is_on(Actuator::Backlight));
    }

    #[test]
    fn test_sensor_fault_holds_outputs_off() {
        let mut controller = controller();
        let mut canvas = TextCanvas::new();
        controller.sensor_mut().temp_x10 = Ok(500);
        press(&mut controller, &mut canvas, 0, InputEvent::LongPress(1500)).unwrap();
        assert!(controller.actuators().is_on(Actuator::Heater));

        controller.sensor_mut().temp_x10 = Err(SensorError::CrcMismatch);
        let result = controller.step(1_000, TickEvents::NONE, &mut canvas);
        assert_eq!(result, Err(Error::Sensor(SensorError::CrcMismatch)));
        assert!(matches!(controller.mode(), Mode::Running(_)));
        assert_eq!(controller.actuators().state(), ActuatorState::default());
        assert_eq!(canvas.line(2), "Temp: --");

        controller.sensor_mut().temp_x10 = Ok(500);
        controller.step(2_000, TickEvents::NONE, &mut canvas).unwrap();
        assert!(controller.actuators().is_on(Actuator::Heater));
    }

    #[test]
    fn test_run_waits_for_fresh_reading() {
        let mut controller = controller();
        let mut canvas = TextCanvas::new();
        controller.sensor_mut().temp_x10 = Err(SensorError::NotReady);
        press(&mut controller, &mut canvas, 0, InputEvent::LongPress(1500)).unwrap();
        assert_eq!(controller.sensor_mut().restarts, 1);

        // Idle while the first conversion runs, without reporting a fault
        controller.step(500, TickEvents::NONE, &mut canvas).unwrap();
        assert!(matches!(controller.mode(), Mode::Running(_)));
        assert_eq!(controller.actuators().state(), ActuatorState::default());
        assert_eq!(canvas.line(2), "Temp: --");

        controller.sensor_mut().temp_x10 = Ok(500);
        controller.step(1_000, TickEvents::NONE, &mut canvas).unwrap();
        assert!(controller.actuators().is_on(Actuator::Heater));

        // Each run starts from a new measurement
        press(&mut controller, &mut canvas, 2_000, InputEvent::LongPress(1500)).unwrap();
        assert_eq!(controller.mode(), &Mode::Menu);
        press(&mut controller, &mut canvas, 3_000, InputEvent::LongPress(1500)).unwrap();
        assert_eq!(controller.sensor_mut().restarts, 2);
    }

    #[test]
    fn test_sensor_not_read_outside_run() {
        let mut controller = controller();
        let mut canvas = TextCanvas::new();
        controller.step(0, TickEvents::NONE, &mut canvas).unwrap();
        assert_eq!(controller.sensor_mut().reads, 0);
    }

    /// Surface whose flush always fails
    struct BrokenSurface(TextCanvas);

    impl DrawSurface for BrokenSurface {
        fn clear_buffer(&mut self) -> Result<(), DisplayError> {
            self.0.clear_buffer()
        }

        fn set_font(&mut self, font: usonic_display::Font) -> Result<(), DisplayError> {
            self.0.set_font(font)
        }

        fn set_cursor(&mut self, x: u16, y: u16) -> Result<(), DisplayError> {
            self.0.set_cursor(x, y)
        }

        fn print(&mut self, text: &str) -> Result<(), DisplayError> {
            self.0.print(text)
        }

        fn draw_box(&mut self, x: u16, y: u16, w: u16, h: u16) -> Result<(), DisplayError> {
            self.0.draw_box(x, y, w, h)
        }

        fn set_draw_color(&mut self, color: usonic_display::DrawColor) -> Result<(), DisplayError> {
            self.0.set_draw_color(color)
        }

        fn set_contrast(&mut self, contrast: u8) -> Result<(), DisplayError> {
            self.0.set_contrast(contrast)
        }

        fn send_buffer(&mut self) -> Result<(), DisplayError> {
            Err(DisplayError::Communication)
        }
    }

    #[test]
    fn test_display_failure_does_not_block_shutdown() {
        let mut controller = controller();
        let mut surface = BrokenSurface(TextCanvas::new());

        let result = controller.step(0, TickEvents::single(InputEvent::LongPress(1500)), &mut surface);
        assert_eq!(result, Err(Error::Display(DisplayError::Communication)));
        assert!(controller.actuators().is_on(Actuator::Cleaner));

        let _ = controller.step(10, TickEvents::single(InputEvent::LongPress(1500)), &mut surface);
        assert_eq!(controller.mode(), &Mode::Menu);
        assert_eq!(controller.actuators().state(), ActuatorState::default());
    }
}
