use crate::config::{Config, ConfigStore};
use crate::contacts::{ContactBook, ContactForm};
use crate::devices::{scan_devices, Device, DevicePanel};
use crate::form::Field;
use crate::history::{HistoryLog, HistoryTab};
use crate::login::LoginForm;
use crate::route::Route;
use crate::theme::ThemeMode;
use crate::toast::{ToastQueue, ToastVariant};
use crate::ui;
use crate::ui::widgets::{navbar, toast_layer};
use iced::widget::{column, container, scrollable, stack};
use iced::{Element, Length, Subscription, Task, Theme};
use std::time::{Duration, Instant};

/// State owned by the screen currently on display.
///
/// Replacing the screen drops its state, which is how contacts reset and the
/// splash timer gets cancelled when the user leaves a screen.
pub enum Screen {
    Landing,
    Splash { token: u64 },
    Login(LoginForm),
    Dashboard,
    ConnectDevice(DevicePanel),
    EmergencyContacts(ContactBook),
    AddContact(ContactForm),
    History(HistoryLog),
    NotFound(String),
}

// Iced Application State
pub struct SafeLink {
    pub route: Route,
    pub screen: Screen,
    pub theme: ThemeMode,
    pub toasts: ToastQueue,
    config: Config,
    store: ConfigStore,
    splash_token: u64,
}

#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Route),
    ToggleTheme,
    Tick(Instant),
    DismissToast(u64),
    SplashElapsed(u64),
    LearnMore,
    FieldChanged(Field, String),
    SubmitLogin,
    SubmitContact,
    BluetoothToggled(bool),
    DevicesScanned(Vec<Device>),
    ConnectDevice(u32),
    DisconnectDevice,
    DismissBanner,
    DeleteContact(u32),
    SelectHistoryTab(HistoryTab),
}

async fn splash_timer(delay: Duration, token: u64) -> u64 {
    tokio::time::sleep(delay).await;
    token
}

impl SafeLink {
    /// `store` is where theme changes are written back
    pub fn new(config: Config, store: ConfigStore) -> (Self, Task<Message>) {
        let start = Route::from_path(&config.start_route);
        let mut app = SafeLink {
            route: Route::Landing,
            screen: Screen::Landing,
            theme: config.theme,
            toasts: ToastQueue::new(config.toast_duration()),
            config,
            store,
            splash_token: 0,
        };
        let task = app.navigate(start);
        (app, task)
    }

    /// Tears down the current screen and mounts the one for `route`
    fn navigate(&mut self, route: Route) -> Task<Message> {
        log::info!("Navigating {} -> {}", self.route, route);

        let (screen, task) = match &route {
            Route::Landing => (Screen::Landing, Task::none()),
            Route::Splash => {
                self.splash_token += 1;
                let token = self.splash_token;
                let delay = self.config.splash_delay();
                (
                    Screen::Splash { token },
                    Task::perform(splash_timer(delay, token), Message::SplashElapsed),
                )
            }
            Route::Login => (Screen::Login(LoginForm::default()), Task::none()),
            Route::Dashboard => (Screen::Dashboard, Task::none()),
            Route::ConnectDevice => (
                Screen::ConnectDevice(DevicePanel::new()),
                Task::perform(scan_devices(), Message::DevicesScanned),
            ),
            Route::EmergencyContacts => (
                Screen::EmergencyContacts(ContactBook::from_fixtures()),
                Task::none(),
            ),
            Route::AddContact => (Screen::AddContact(ContactForm::default()), Task::none()),
            Route::History => (Screen::History(HistoryLog::from_fixtures()), Task::none()),
            Route::NotFound(path) => {
                log::error!("404 Error: User attempted to access non-existent route: {}", path);
                (Screen::NotFound(path.clone()), Task::none())
            }
        };

        self.screen = screen;
        self.route = route;
        task
    }

    fn toast(&mut self, title: &str, description: String, variant: ToastVariant) {
        self.toasts.push(title, description, variant, Instant::now());
    }

    fn persist_config(&self) {
        if let Err(e) = self.store.save(&self.config) {
            log::warn!("Could not save settings: {}", e);
        }
    }

    fn ignored(&self, message: &str) -> Task<Message> {
        log::debug!("Ignoring {} on {}", message, self.route);
        Task::none()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(route) => self.navigate(route),
            Message::ToggleTheme => {
                self.theme = self.theme.toggle();
                self.config.theme = self.theme;
                log::info!("Theme switched to {:?}", self.theme);
                self.persist_config();
                Task::none()
            }
            Message::Tick(now) => {
                self.toasts.expire(now);
                Task::none()
            }
            Message::DismissToast(id) => {
                self.toasts.dismiss(id);
                Task::none()
            }
            Message::SplashElapsed(token) => match self.screen {
                Screen::Splash { token: current } if current == token => self.navigate(Route::Login),
                _ => self.ignored("stale splash timer"),
            },
            Message::LearnMore => match self.screen {
                Screen::Landing => scrollable::snap_to(
                    ui::landing::scroll_id(),
                    scrollable::RelativeOffset::END,
                ),
                _ => self.ignored("learn more"),
            },
            Message::FieldChanged(field, value) => {
                match &mut self.screen {
                    Screen::Login(form) => form.set(field, value),
                    Screen::AddContact(form) => form.set(field, value),
                    _ => return self.ignored("field edit"),
                }
                Task::none()
            }
            Message::SubmitLogin => {
                let result = match &mut self.screen {
                    Screen::Login(form) => form.submit(),
                    _ => return self.ignored("login submit"),
                };
                match result {
                    Ok(()) => {
                        self.toast("Welcome back", "You are now signed in".to_string(), ToastVariant::Default);
                        self.navigate(Route::Dashboard)
                    }
                    Err(e) => {
                        log::warn!("Login rejected: {:?}", e.fields());
                        self.toast("Missing Information", e.to_string(), ToastVariant::Destructive);
                        Task::none()
                    }
                }
            }
            Message::SubmitContact => {
                let result = match &mut self.screen {
                    Screen::AddContact(form) => form.submit(),
                    _ => return self.ignored("contact submit"),
                };
                match result {
                    Ok(contact) => {
                        log::info!(
                            "Contact added: {} ({}, {})",
                            contact.name,
                            contact.relation,
                            contact.phone
                        );
                        self.toast(
                            "Contact Added",
                            format!("{} has been added to your emergency contacts", contact.name),
                            ToastVariant::Default,
                        );
                        self.navigate(Route::EmergencyContacts)
                    }
                    Err(e) => {
                        log::warn!("Contact rejected: {:?}", e.fields());
                        self.toast("Missing Information", e.to_string(), ToastVariant::Destructive);
                        Task::none()
                    }
                }
            }
            Message::BluetoothToggled(on) => match &mut self.screen {
                Screen::ConnectDevice(panel) => {
                    log::info!("Bluetooth {}", if on { "on" } else { "off" });
                    if panel.set_bluetooth(on) {
                        Task::perform(scan_devices(), Message::DevicesScanned)
                    } else {
                        Task::none()
                    }
                }
                _ => self.ignored("bluetooth toggle"),
            },
            Message::DevicesScanned(devices) => match &mut self.screen {
                // A scan that finishes after Bluetooth went off is dropped
                Screen::ConnectDevice(panel) if panel.bluetooth_on => {
                    panel.devices_scanned(devices);
                    Task::none()
                }
                _ => self.ignored("scan result"),
            },
            Message::ConnectDevice(id) => match &mut self.screen {
                Screen::ConnectDevice(panel) => {
                    let previous = panel.connect(id);
                    log::info!(
                        "Connected to {} (was {:?})",
                        panel.device_name(id).unwrap_or("unknown device"),
                        previous
                    );
                    Task::none()
                }
                _ => self.ignored("connect"),
            },
            Message::DisconnectDevice => match &mut self.screen {
                Screen::ConnectDevice(panel) => {
                    if let Some(id) = panel.disconnect() {
                        log::info!("Disconnected device {}", id);
                    }
                    Task::none()
                }
                _ => self.ignored("disconnect"),
            },
            Message::DismissBanner => match &mut self.screen {
                Screen::ConnectDevice(panel) => {
                    panel.dismiss_banner();
                    Task::none()
                }
                _ => self.ignored("banner dismiss"),
            },
            Message::DeleteContact(id) => match &mut self.screen {
                Screen::EmergencyContacts(book) => {
                    if let Some(contact) = book.get(id) {
                        log::info!("Deleting contact {}", contact.name);
                    }
                    book.delete(id);
                    Task::none()
                }
                _ => self.ignored("contact delete"),
            },
            Message::SelectHistoryTab(tab) => match &mut self.screen {
                Screen::History(log) => {
                    log.tab = tab;
                    Task::none()
                }
                _ => self.ignored("tab select"),
            },
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.toasts.is_empty() {
            Subscription::none()
        } else {
            iced::time::every(Duration::from_millis(250)).map(Message::Tick)
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme.to_iced()
    }

    pub fn view(&'_ self) -> Element<'_, Message> {
        let screen = match &self.screen {
            Screen::Landing => ui::landing::view(),
            Screen::Splash { .. } => ui::splash::view(),
            Screen::Login(form) => ui::login::view(form),
            Screen::Dashboard => ui::dashboard::view(),
            Screen::ConnectDevice(panel) => ui::connect_device::view(panel),
            Screen::EmergencyContacts(book) => ui::contacts::view(book),
            Screen::AddContact(form) => ui::add_contact::view(form),
            Screen::History(log) => ui::history::view(log),
            Screen::NotFound(path) => ui::not_found::view(path),
        };

        let page: Element<'_, Message> = if self.route.has_navbar() {
            column![navbar(self.theme), screen].into()
        } else {
            screen
        };

        let content: Element<'_, Message> = if self.toasts.is_empty() {
            page
        } else {
            stack![page, toast_layer(&self.toasts)].into()
        };

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
