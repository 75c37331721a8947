use iced::event::{self, Event};
use iced::keyboard;
use iced::widget::{column, container, image, row, text, Space};
use iced::{Element, Length, Size, Subscription, Task, Theme};
use rfd::{MessageDialog, MessageLevel};
use std::path::Path;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use photo_sorter::config::{AppConfig, CONFIG_FILE};
use photo_sorter::keymap::{self, KeyId};
use photo_sorter::state::data::{ExifFields, Pixels};
use photo_sorter::ui::histogram::Histogram;
use photo_sorter::ui::{panel, preview};
use photo_sorter::{Presenter, Session};

/// What is currently on screen
#[derive(Default)]
struct Screen {
    status: String,
    image: Option<Shown>,
    histogram: Option<Histogram>,
    fields: Option<ExifFields>,
}

/// The decoded image, ready for the image widget
struct Shown {
    handle: image::Handle,
    width: u32,
    height: u32,
}

impl Presenter for Screen {
    fn clear(&mut self) {
        self.image = None;
        self.histogram = None;
        self.fields = None;
    }

    fn render_image(&mut self, pixels: &Pixels) {
        self.image = Some(Shown {
            handle: image::Handle::from_rgba(pixels.width, pixels.height, pixels.rgba.clone()),
            width: pixels.width,
            height: pixels.height,
        });
    }

    fn render_histogram(&mut self, histogram: &[u32; 256]) {
        self.histogram = Some(Histogram { data: *histogram });
    }

    fn render_metadata_fields(&mut self, fields: &ExifFields) {
        self.fields = Some(fields.clone());
    }

    fn render_status(&mut self, text: &str) {
        self.status = text.to_string();
    }
}

/// Main application state
struct Sorter {
    session: Session,
    screen: Screen,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// A bindable key went down
    KeyDown(KeyId),
    /// A bindable key was released
    KeyUp,
}

impl Sorter {
    fn title(&self) -> String {
        format!("Bulk Image Sorter v{}", env!("CARGO_PKG_VERSION"))
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::KeyDown(key_id) => {
                if let Some(key) = keymap::to_char(key_id) {
                    // Failures are logged and shown on the status line by the session
                    let _ = self.session.on_key_down(key, &mut self.screen);
                }
            }
            Message::KeyUp => self.session.on_key_up(),
        }
        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let shown: Element<Message> = match &self.screen.image {
            Some(shown) => {
                let (width, height) = preview::fit(shown.width, shown.height);
                image(shown.handle.clone())
                    .width(Length::Fixed(width as f32))
                    .height(Length::Fixed(height as f32))
                    .into()
            }
            None => Space::new(Length::Fill, Length::Fill).into(),
        };

        let preview_pane = column![
            text(&self.screen.status).size(16),
            container(shown)
                .width(Length::Fixed(preview::PREVIEW_WIDTH))
                .height(Length::Fixed(preview::PREVIEW_HEIGHT)),
        ]
        .spacing(8)
        .padding(8);

        let dimensions = self.screen.image.as_ref().map(|s| (s.width, s.height));
        let side_panel = column![
            panel::key_guide(self.session.bindings()),
            panel::metadata(
                self.screen.histogram.as_ref(),
                dimensions,
                self.screen.fields.as_ref(),
            ),
        ]
        .spacing(20)
        .padding(8)
        .width(Length::Fixed(panel::PANEL_WIDTH));

        row![preview_pane, side_panel].into()
    }

    /// Forward presses and releases of bindable keys to the session
    fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, _status, _window| match event {
            Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                keymap::from_key(&key).map(Message::KeyDown)
            }
            Event::Keyboard(keyboard::Event::KeyReleased { key, .. }) => {
                keymap::from_key(&key).map(|_| Message::KeyUp)
            }
            _ => None,
        })
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Log the error, show it in a dialog and give up
fn fatal(message: String) -> ! {
    error!("{message}");
    MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title("Bulk Image Sorter")
        .set_description(message.as_str())
        .show();
    std::process::exit(1);
}

fn main() -> iced::Result {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("photo_sorter=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = AppConfig::load_or_create(Path::new(CONFIG_FILE))
        .unwrap_or_else(|e| fatal(e.to_string()));

    // Everything is validated and the first image loaded before the window opens
    let mut screen = Screen::default();
    let session = Session::initialize(&config, &mut screen)
        .unwrap_or_else(|e| fatal(e.to_string()));

    info!(images = session.queue_len(), "Opening sorter window");

    iced::application(Sorter::title, Sorter::update, Sorter::view)
        .subscription(Sorter::subscription)
        .theme(Sorter::theme)
        .window_size(Size::new(1290.0, 720.0))
        .run_with(move || (Sorter { session, screen }, Task::none()))
}
