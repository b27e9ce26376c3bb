// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Gesture-driven camera/feed frame transitions.
//!
//! A square frame shows either the live camera viewfinder or one photo
//! from a newest-first feed. Vertical drags move between them: up from the
//! camera morphs into the feed, up and down in the feed step through it,
//! and down from the first photo morphs back to the camera. Releases
//! commit or cancel with spring physics.
//!
//! # Key entry points
//!
//! - [`engine::FeedFrame`] - the per-surface frame context
//! - [`engine::TransitionOrchestrator`] - the transition state machine
//! - [`input::GestureRecognizer`] - drag events to frame commands
//! - [`compositor::LayerCompositor`] - base/top image layers
//! - [`animation`] - spring solver and parallel spring groups
//! - [`options::Options`] - spring and gesture tuning with TOML presets

pub mod animation;
pub mod camera;
pub mod compositor;
pub mod engine;
pub mod error;
pub mod feed;
pub mod input;
pub mod options;
pub mod transition;
pub mod util;
