// Layout engine: font metrics, greedy wrapping, the flow cursor and the primitive
// renderers that place text on pages.
// Everything here is synchronous and CPU-bound; callers run it inside spawn_blocking.

pub mod contact_bar;
pub mod cursor;
pub mod font_metrics;
pub mod primitives;
pub mod wrap;

pub use font_metrics::{FontVariant, StandardMetrics, TextMetrics};
pub use primitives::LayoutFrame;
