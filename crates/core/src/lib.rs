//! Core library for the Arud Explorer.
//!
//! The crate models Al-Khalil's five prosodic circles of classical Arabic
//! poetry. Each circle is a cyclic sequence of syllabic units; each meter
//! reads that sequence from its own offset and groups the units into named
//! metrical feet. Around that model sit the pieces the explorer needs:
//! navigation between circles and meters, diagram geometry, the banner
//! transition timeline and text/SVG renderers.

pub mod catalog;
pub mod config;
pub mod error;
pub mod geometry;
pub mod model;
pub mod render;
pub mod resolver;
pub mod timeline;
pub mod view;

pub use catalog::{Catalog, MeterRef};
pub use config::{AppConfig, BannerConfig, DiagramConfig};
pub use error::{ArudError, Result};
pub use geometry::{BannerLayout, CircleDiagram};
pub use model::{Circle, CircleId, CircleTheme, Meter, PoetryExample, Tafila};
pub use resolver::{OverrideTable, PatternResolver, ResolvedFoot, TafilaTable, DEFAULT_SEQUENCE};
pub use timeline::{BannerEvent, BannerState, BannerTransition, PlaybackClock, Scheduler};
pub use view::{Navigator, Screen, ViewState};
