//! Content portal for areas and cataloged works.

mod assets;
pub mod components;
mod config;
mod fixture;
mod media;
pub mod model;
pub mod pages;
mod richtext;
pub mod server;
pub mod store;
mod util;

pub use assets::PORTAL_CSS;
pub use config::{Command, Config};
pub use fixture::{FixtureReport, load_fixture, load_fixture_str};
pub use media::{
    MediaMigrationReport, MediaStorage, documento_file_path, migrate_media, trabajo_image_path,
};
pub use model::{
    Area, DocType, Documento, Highlight, MAX_TAGLINE_WORDS, Status, Trabajo, ValidationError,
};
pub use richtext::{RichTextRenderer, render_md_block, render_md_inline, render_md_text};
pub use server::{AppState, PortalError, router, serve};
pub use store::{
    AreaStore, DocumentoStore, HighlightStore, StoreError, StoreResult, TrabajoStore,
    apply_migrations, latest_version, open_db, open_db_in_memory,
};
pub use util::{format_date, truncate_chars};
