//! Terminal implementation of `DisplaySurface`.
//!
//! Asks the terminal emulator to fullscreen its own window with the xterm
//! window-manipulation sequence `CSI 10 ; 1 t` (and `CSI 10 ; 0 t` to leave).
//! Terminals that don't understand it ignore it, and none of them answer, so
//! the flag is optimistic: a successful write counts as the window having
//! changed. The presenter layout switches either way, which is what the
//! audience sees.

use std::fmt;
use std::io::{self, Write};

use crossterm::{Command, execute};
use log::{debug, info};

use crate::core::surface::DisplaySurface;

/// `CSI 10 ; 1 t`: toggle the window into fullscreen.
#[derive(Debug, Clone, Copy)]
pub struct EnterWindowFullscreen;

impl Command for EnterWindowFullscreen {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        f.write_str("\x1b[10;1t")
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> io::Result<()> {
        Ok(())
    }
}

/// `CSI 10 ; 0 t`: return the window to its normal size.
#[derive(Debug, Clone, Copy)]
pub struct LeaveWindowFullscreen;

impl Command for LeaveWindowFullscreen {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        f.write_str("\x1b[10;0t")
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> io::Result<()> {
        Ok(())
    }
}

pub struct TerminalSurface<W: Write> {
    out: W,
    fullscreen: bool,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            fullscreen: false,
        }
    }

    #[cfg(test)]
    fn written(&self) -> &W {
        &self.out
    }
}

impl<W: Write> DisplaySurface for TerminalSurface<W> {
    fn request_fullscreen(&mut self) -> io::Result<()> {
        execute!(self.out, EnterWindowFullscreen)?;
        self.fullscreen = true;
        info!("Requested window fullscreen");
        Ok(())
    }

    fn exit_fullscreen(&mut self) -> io::Result<()> {
        execute!(self.out, LeaveWindowFullscreen)?;
        self.fullscreen = false;
        info!("Left window fullscreen");
        Ok(())
    }

    fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }
}

impl<W: Write> Drop for TerminalSurface<W> {
    fn drop(&mut self) {
        // Never leave the user's terminal window stuck in fullscreen
        if self.fullscreen {
            debug!("Restoring window size on exit");
            let _ = execute!(self.out, LeaveWindowFullscreen);
        }
    }
}
