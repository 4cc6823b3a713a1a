use std::io;

pub mod fireworks;

/// Something the frame loop can tick and draw.
pub trait Effect {
    /// Advances one tick.
    fn update(&mut self);

    /// Appends one complete frame to `out`.
    fn render(&mut self, out: &mut Vec<u8>) -> io::Result<()>;

    /// One-line state summary for logs.
    fn status(&self) -> String {
        String::new()
    }
}
