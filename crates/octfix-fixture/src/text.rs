//! Brace-initializer text for fixtures.
//!
//! Scalars use six decimals, vectors print as `{x, y, z}`, boxes as
//! `{min, max}` and rays as `{origin, direction}`. Each fixture block ends
//! with `},` so a file of blocks can be pasted into an array initializer.

use std::fmt;
use std::io::Write;

use octfix_kernel_bbox::Aabb3;
use octfix_kernel_math::Vec3;
use octfix_kernel_raytrace::Ray;

use crate::error::Result;
use crate::fixture::Fixture;

/// Text form of a vector.
pub struct VecText<'a>(pub &'a Vec3);

/// Text form of a box.
pub struct BoxText<'a>(pub &'a Aabb3);

/// Text form of a ray.
pub struct RayText<'a>(pub &'a Ray);

impl fmt::Display for VecText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{:.6}, {:.6}, {:.6}}}", self.0.x, self.0.y, self.0.z)
    }
}

impl fmt::Display for BoxText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}}", VecText(&self.0.min), VecText(&self.0.max))
    }
}

impl fmt::Display for RayText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{}, {}}}",
            VecText(&self.0.origin),
            VecText(&self.0.direction)
        )
    }
}

impl fmt::Display for Fixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{")?;
        writeln!(f, "  {},", BoxText(&self.aabb))?;
        writeln!(f, "  {{")?;
        for child in &self.children {
            writeln!(f, "    {},", BoxText(child))?;
        }
        writeln!(f, "  }},")?;
        writeln!(f, "  {:.6},", self.diagonal)?;
        writeln!(f, "  {},", RayText(&self.miss_ray))?;
        writeln!(f, "  {},", RayText(&self.hit_ray))?;
        writeln!(f, "  {},", RayText(&self.reflected_ray))?;
        writeln!(f, "  {},", self.child)?;
        writeln!(f, "  {:.6}", self.distance)?;
        writeln!(f, "}},")
    }
}

/// Write one fixture block.
pub fn write_fixture<W: Write>(writer: &mut W, fixture: &Fixture) -> Result<()> {
    write!(writer, "{fixture}")?;
    Ok(())
}

/// Write fixture blocks back to back, returning how many were written.
pub fn write_fixtures<'a, W, I>(writer: &mut W, fixtures: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a Fixture>,
{
    let mut count = 0;
    for fixture in fixtures {
        write_fixture(writer, fixture)?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}
