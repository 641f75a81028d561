/// Read access to a row-major single-channel image.
pub trait ImageView {
    type Pixel: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;

    fn row(&self, y: usize) -> &[Self::Pixel];

    fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Sample with replicated borders; coordinates outside the image are
    /// clamped to the nearest edge pixel.
    fn get_clamped(&self, x: isize, y: isize) -> Self::Pixel {
        let xc = x.clamp(0, self.width() as isize - 1) as usize;
        let yc = y.clamp(0, self.height() as isize - 1) as usize;
        self.row(yc)[xc]
    }
}

pub trait ImageViewMut: ImageView {
    fn row_mut(&mut self, y: usize) -> &mut [Self::Pixel];
}
