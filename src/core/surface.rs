//! The host display the presentation is shown on.
//!
//! The controller only ever asks the surface to enter or leave fullscreen
//! and reads back whether it is fullscreen. How that happens (terminal
//! escape sequences, a window manager call, nothing at all in tests) is
//! the implementation's business.

use std::io;

pub trait DisplaySurface {
    /// Ask the host for exclusive fullscreen. Hosts may ignore the request.
    fn request_fullscreen(&mut self) -> io::Result<()>;

    fn exit_fullscreen(&mut self) -> io::Result<()>;

    /// The host's own view of its fullscreen state.
    fn is_fullscreen(&self) -> bool;
}
