use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

/// Fills `output` row by row on the calling thread.
///
/// `output` is row-major and must hold exactly `pixel_rect.size()` values.
pub fn generate_fractal_serial<Alg: FractalAlgorithm>(
    pixel_rect: PixelRect,
    algorithm: &Alg,
    output: &mut [Alg::Success],
) -> Result<(), Alg::Failure> {
    debug_assert_eq!(output.len() as u64, pixel_rect.size());

    let row_width = pixel_rect.width() as usize;
    let x_start = pixel_rect.top_left().x;
    let rows = pixel_rect.top_left().y..=pixel_rect.bottom_right().y;

    for (row, y) in output.chunks_mut(row_width).zip(rows) {
        for (slot, x) in row.iter_mut().zip(x_start..) {
            *slot = algorithm.compute(Point { x, y })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[derive(Debug, PartialEq)]
    struct StubError {}

    impl std::fmt::Display for StubError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "StubError")
        }
    }

    impl Error for StubError {}

    #[derive(Debug)]
    struct StubCoordsAlgorithm {}

    impl FractalAlgorithm for StubCoordsAlgorithm {
        type Success = (i32, i32);
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            Ok((pixel.x, pixel.y))
        }
    }

    #[derive(Debug)]
    struct StubFailOnOriginAlgorithm {}

    impl FractalAlgorithm for StubFailOnOriginAlgorithm {
        type Success = u32;
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            if pixel == (Point { x: 0, y: 0 }) {
                return Err(StubError {});
            }
            Ok(1)
        }
    }

    #[test]
    fn test_serial_walks_rows_then_columns() {
        let pixel_rect = PixelRect::new(Point { x: -1, y: -1 }, Point { x: 1, y: 0 }).unwrap();
        let mut output = vec![(0, 0); 6];

        generate_fractal_serial(pixel_rect, &StubCoordsAlgorithm {}, &mut output).unwrap();

        assert_eq!(
            output,
            vec![(-1, -1), (0, -1), (1, -1), (-1, 0), (0, 0), (1, 0)]
        );
    }

    #[test]
    fn test_serial_single_pixel() {
        let pixel_rect = PixelRect::new(Point { x: 3, y: 4 }, Point { x: 3, y: 4 }).unwrap();
        let mut output = vec![(0, 0); 1];

        generate_fractal_serial(pixel_rect, &StubCoordsAlgorithm {}, &mut output).unwrap();

        assert_eq!(output, vec![(3, 4)]);
    }

    #[test]
    fn test_serial_propagates_algorithm_failure() {
        let pixel_rect = PixelRect::new(Point { x: -2, y: -2 }, Point { x: 1, y: 1 }).unwrap();
        let mut output = vec![0; 16];

        let result = generate_fractal_serial(pixel_rect, &StubFailOnOriginAlgorithm {}, &mut output);

        assert_eq!(result, Err(StubError {}));
    }
}
