#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod components;
pub mod config;
pub mod dialogs;
pub mod error;
pub mod input;
pub mod mirror;
pub mod panels;
pub mod pen;
pub mod session;
pub mod surface;

pub use app::PaintApp;
pub use config::AppConfig;
pub use error::ThicknessError;
pub use mirror::{MirrorEvent, MirrorLink, MirrorSurface, RetentionPolicy};
pub use pen::{PenState, Thickness};
pub use session::{PaintSession, ProjectorState};
pub use surface::{DrawSurface, DrawingContext, Point, Renderable, Segment};
