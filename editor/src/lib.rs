//! Interactive layout editor for data-driven image overlays.
//!
//! A user loads a template image and a table of rows, then places text and
//! image boxes over the template, each bound to one column. The editor
//! tracks box geometry in display space, handles drag/resize/selection
//! gestures, and serializes the layout into original-image coordinates for
//! a rendering service that stamps every row onto the template.
//!
//! The crate compiles to WebAssembly for the browser and natively for tools
//! and tests. All I/O is left to the host: it uploads files, calls the
//! rendering service and feeds the results back into
//! [`engine::EditorCore`], reconciling the returned [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EditorCore`] |
//! | [`doc`] | Layout box model and store |
//! | [`selection`] | Single selection and the property-panel snapshot |
//! | [`input`] | Pointer event types and the gesture state machine |
//! | [`surface`] | Template frame, display fit and scale factors |
//! | [`transform`] | Display/original coordinate conversion |
//! | [`export`] | Layout serialization for the rendering service |
//! | [`collab`] | Wire contracts with upload and rendering collaborators |
//! | [`controls`] | In-flight request guards for host controls |
//! | [`upload`] | File selection validation |
//! | [`render`] | Scene building, hit-testing and canvas drawing |
//! | [`error`] | Error types |
//! | [`consts`] | Shared numeric constants (display bounds, minimum sizes, etc.) |

pub mod collab;
pub mod consts;
pub mod controls;
pub mod doc;
pub mod engine;
pub mod error;
pub mod export;
pub mod input;
pub mod render;
pub mod selection;
pub mod surface;
pub mod transform;
pub mod upload;
