// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to implement the interactive session.
//
// Module responsibilities:
// - `api`: Encapsulates the joke sources - three blocking HTTP calls to
//   public joke APIs plus two joke lists compiled into the binary - and
//   the error taxonomy for failed fetches.
// - `ui`: Implements the terminal menu loop and the decorative rendering
//   (banners, boxes, the loading bar) and delegates fetches to `api`.
//
// Keeping this separation makes it easy to test the fetch logic against
// a mock HTTP server and to drive the menu loop from in-memory buffers.
pub mod api;
pub mod ui;
