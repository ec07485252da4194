use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

/// Fills `output` in parallel using rayon's work-stealing scheduler.
///
/// Each row of the buffer is an independent task; workers write only into
/// the row slice they were handed, so the result is identical to
/// [`generate_fractal_serial`](super::generate_fractal_serial::generate_fractal_serial)
/// regardless of how rows are scheduled. Returns once every row is done,
/// or with the first algorithm failure observed.
pub fn generate_fractal_parallel_rayon<Alg>(
    pixel_rect: PixelRect,
    algorithm: &Alg,
    output: &mut [Alg::Success],
) -> Result<(), Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
{
    debug_assert_eq!(output.len() as u64, pixel_rect.size());

    let row_width = pixel_rect.width() as usize;
    let x_start = pixel_rect.top_left().x;
    let y_start = pixel_rect.top_left().y;

    output
        .par_chunks_mut(row_width)
        .enumerate()
        .try_for_each(|(row_index, row)| {
            let y = y_start + row_index as i32;

            for (slot, x) in row.iter_mut().zip(x_start..) {
                *slot = algorithm.compute(Point { x, y })?;
            }

            Ok(())
        })
}
