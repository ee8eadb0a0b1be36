use embedded_graphics::pixelcolor::Rgb565;

pub struct ConfirmPalette565 {
    pub background: Rgb565,
    pub on_background: Rgb565,
    pub green: Rgb565,
    pub red: Rgb565,
    pub orange: Rgb565,
    /// Labels around the bold values
    pub text_secondary: Rgb565,
}

pub const PALETTE: ConfirmPalette565 = ConfirmPalette565 {
    background: Rgb565::new(0, 0, 0),
    on_background: Rgb565::new(28, 57, 28),
    green: Rgb565::new(9, 50, 10),
    red: Rgb565::new(29, 12, 8),
    orange: Rgb565::new(31, 38, 0),
    text_secondary: Rgb565::new(17, 34, 17),
};
