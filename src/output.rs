use std::io::{self, Write};

use glam::DVec3;

/// Writes each point as an `x y z` line and returns how many lines went out.
/// Lines already written stay written if a later write fails.
pub fn write_points<W, I>(writer: &mut W, points: I) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = DVec3>,
{
    let mut written = 0;
    for p in points {
        writeln!(writer, "{} {} {}", p.x, p.y, p.z)?;
        written += 1;
    }
    Ok(written)
}
