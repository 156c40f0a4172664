//! SSD1322 OLED Display Driver
//!
//! Driver for 256x64 SSD1322-based OLED panels (NHD-3.12-25664) over 4-wire
//! SPI. The controller is 4 bpp grayscale; the frame buffer is monochrome and
//! lit pixels are sent at full brightness.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Baseline, Text};
use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::spi::SpiBus;

use monorail_core::bitmap::Xbm;
use monorail_core::config::PanelConfig;
use monorail_core::layout::Position;
use monorail_core::traits::{DisplayError, DisplaySurface, FontFace};

use crate::fonts::mono_font;
use crate::framebuffer::{FrameBuffer, GRAY4_ROW_BYTES};

/// Segment columns addressed by the controller (480 pixels, 4 per column)
const CONTROLLER_COLUMNS: u16 = 120;

/// Pixels per column address
const PIXELS_PER_COLUMN: u16 = 4;

/// SSD1322 commands
mod cmd {
    pub const SET_COLUMN_ADDR: u8 = 0x15;
    pub const WRITE_RAM: u8 = 0x5C;
    pub const SET_ROW_ADDR: u8 = 0x75;
    pub const SET_REMAP: u8 = 0xA0;
    pub const SET_START_LINE: u8 = 0xA1;
    pub const SET_DISPLAY_OFFSET: u8 = 0xA2;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const EXIT_PARTIAL: u8 = 0xA9;
    pub const SET_VDD: u8 = 0xAB;
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_PHASE_LENGTH: u8 = 0xB1;
    pub const SET_CLOCK_DIV: u8 = 0xB3;
    pub const SET_ENHANCEMENT_A: u8 = 0xB4;
    pub const SET_GPIO: u8 = 0xB5;
    pub const SET_SECOND_PRECHARGE: u8 = 0xB6;
    pub const DEFAULT_GRAYSCALE: u8 = 0xB9;
    pub const SET_PRECHARGE_VOLTAGE: u8 = 0xBB;
    pub const SET_VCOMH: u8 = 0xBE;
    pub const SET_CONTRAST: u8 = 0xC1;
    pub const SET_MASTER_CONTRAST: u8 = 0xC7;
    pub const SET_MUX_RATIO: u8 = 0xCA;
    pub const SET_ENHANCEMENT_B: u8 = 0xD1;
    pub const SET_COMMAND_LOCK: u8 = 0xFD;
}

/// SSD1322 OLED driver
pub struct Ssd1322<SPI, DC, CS, RST, D> {
    spi: SPI,
    dc: DC,
    cs: CS,
    rst: RST,
    delay: D,
    buffer: FrameBuffer,
    font: FontFace,
    /// Strip height for paged rendering
    page_rows: u16,
    contrast: u8,
    /// First and last segment column covering the panel
    columns: (u8, u8),
    initialized: bool,
}

impl<SPI, DC, CS, RST, D> Ssd1322<SPI, DC, CS, RST, D>
where
    SPI: SpiBus,
    DC: OutputPin,
    CS: OutputPin,
    RST: OutputPin,
    D: DelayNs,
{
    /// Create a new SSD1322 driver
    pub fn new(spi: SPI, dc: DC, cs: CS, rst: RST, delay: D, panel: &PanelConfig) -> Self {
        let buffer = FrameBuffer::new(panel.width, panel.height);
        let span = buffer.width() / PIXELS_PER_COLUMN;
        let first = CONTROLLER_COLUMNS.saturating_sub(span) / 2;
        let last = first + span.max(1) - 1;

        Self {
            spi,
            dc,
            cs,
            rst,
            delay,
            page_rows: panel.page_rows.clamp(1, buffer.height().max(1)),
            buffer,
            font: FontFace::default(),
            contrast: panel.contrast,
            columns: (first as u8, last as u8),
            initialized: false,
        }
    }

    /// Off-screen buffer
    pub fn buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    /// Whether `init` has completed
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Segment column window used for transfers
    pub fn columns(&self) -> (u8, u8) {
        self.columns
    }

    /// Pulse the reset line
    async fn reset(&mut self) -> Result<(), DisplayError> {
        self.rst.set_high().map_err(|_| DisplayError::Pin)?;
        self.delay.delay_ms(1).await;
        self.rst.set_low().map_err(|_| DisplayError::Pin)?;
        self.delay.delay_ms(10).await;
        self.rst.set_high().map_err(|_| DisplayError::Pin)?;
        self.delay.delay_ms(50).await;
        Ok(())
    }

    /// Send a command byte followed by its parameter bytes
    async fn command(&mut self, command: u8, params: &[u8]) -> Result<(), DisplayError> {
        self.cs.set_low().map_err(|_| DisplayError::Pin)?;
        let result = self.command_inner(command, params).await;
        self.cs.set_high().map_err(|_| DisplayError::Pin)?;
        result
    }

    async fn command_inner(&mut self, command: u8, params: &[u8]) -> Result<(), DisplayError> {
        self.dc.set_low().map_err(|_| DisplayError::Pin)?;
        self.spi
            .write(&[command])
            .await
            .map_err(|_| DisplayError::Communication)?;
        if !params.is_empty() {
            // Parameters travel on the data line
            self.dc.set_high().map_err(|_| DisplayError::Pin)?;
            self.spi
                .write(params)
                .await
                .map_err(|_| DisplayError::Communication)?;
        }
        self.spi
            .flush()
            .await
            .map_err(|_| DisplayError::Communication)
    }

    /// Stream the current window to display RAM
    async fn write_window(&mut self) -> Result<(), DisplayError> {
        if !self.initialized {
            return Err(DisplayError::NotInitialized);
        }

        let (top, rows) = self.buffer.window();
        if rows == 0 {
            return Ok(());
        }
        let (first, last) = self.columns;

        self.command(cmd::SET_COLUMN_ADDR, &[first, last]).await?;
        self.command(cmd::SET_ROW_ADDR, &[top as u8, (top + rows - 1) as u8])
            .await?;
        self.command(cmd::WRITE_RAM, &[]).await?;

        self.cs.set_low().map_err(|_| DisplayError::Pin)?;
        let result = self.write_rows(top, rows).await;
        self.cs.set_high().map_err(|_| DisplayError::Pin)?;
        result
    }

    async fn write_rows(&mut self, top: u16, rows: u16) -> Result<(), DisplayError> {
        self.dc.set_high().map_err(|_| DisplayError::Pin)?;
        let mut line = [0u8; GRAY4_ROW_BYTES];
        for y in top..top + rows {
            let len = self.buffer.gray4_row(y, &mut line);
            self.spi
                .write(&line[..len])
                .await
                .map_err(|_| DisplayError::Communication)?;
        }
        self.spi
            .flush()
            .await
            .map_err(|_| DisplayError::Communication)
    }
}

impl<SPI, DC, CS, RST, D> DisplaySurface for Ssd1322<SPI, DC, CS, RST, D>
where
    SPI: SpiBus,
    DC: OutputPin,
    CS: OutputPin,
    RST: OutputPin,
    D: DelayNs,
{
    async fn init(&mut self) -> Result<(), DisplayError> {
        self.cs.set_high().map_err(|_| DisplayError::Pin)?;
        self.reset().await?;

        // Initialization sequence for NHD-3.12-25664
        let mux = (self.buffer.height().max(16) - 1) as u8;
        let contrast = self.contrast;
        let init_cmds: [(u8, &[u8]); 21] = [
            (cmd::SET_COMMAND_LOCK, &[0x12]), // Unlock
            (cmd::DISPLAY_OFF, &[]),
            (cmd::SET_CLOCK_DIV, &[0x91]),
            (cmd::SET_MUX_RATIO, &[mux]),
            (cmd::SET_DISPLAY_OFFSET, &[0x00]),
            (cmd::SET_START_LINE, &[0x00]),
            (cmd::SET_REMAP, &[0x14, 0x11]), // Nibble remap, dual COM
            (cmd::SET_GPIO, &[0x00]),
            (cmd::SET_VDD, &[0x01]), // Internal regulator
            (cmd::SET_ENHANCEMENT_A, &[0xA0, 0xFD]),
            (cmd::SET_CONTRAST, &[contrast]),
            (cmd::SET_MASTER_CONTRAST, &[0x0F]),
            (cmd::DEFAULT_GRAYSCALE, &[]),
            (cmd::SET_PHASE_LENGTH, &[0xE2]),
            (cmd::SET_ENHANCEMENT_B, &[0x82, 0x20]),
            (cmd::SET_PRECHARGE_VOLTAGE, &[0x1F]),
            (cmd::SET_SECOND_PRECHARGE, &[0x08]),
            (cmd::SET_VCOMH, &[0x07]),
            (cmd::SET_NORMAL, &[]),
            (cmd::EXIT_PARTIAL, &[]),
            (cmd::DISPLAY_ON, &[]),
        ];

        for (command, params) in init_cmds {
            self.command(command, params).await?;
        }

        self.initialized = true;
        Ok(())
    }

    fn set_font(&mut self, font: FontFace) {
        self.font = font;
    }

    fn clear_buffer(&mut self) {
        let height = self.buffer.height();
        if self.buffer.is_full() {
            self.buffer.clear();
        } else {
            self.buffer.set_window(0, height);
        }
    }

    fn draw_bitmap(&mut self, origin: Position, bitmap: &Xbm) {
        let top_left = Point::new(origin.x, origin.y);
        let area = Rectangle::new(top_left, Size::new(bitmap.width(), bitmap.height()));

        // Solid mode: unset bits overwrite with background
        let _ = self.buffer.fill_solid(&area, BinaryColor::Off);
        let _ = self.buffer.draw_iter(bitmap.pixels().map(|(x, y)| {
            Pixel(top_left + Point::new(x as i32, y as i32), BinaryColor::On)
        }));
    }

    fn draw_text(&mut self, origin: Position, text: &str) {
        let style = MonoTextStyle::new(mono_font(self.font), BinaryColor::On);
        let _ = Text::with_baseline(text, Point::new(origin.x, origin.y), style, Baseline::Top)
            .draw(&mut self.buffer);
    }

    async fn present(&mut self) -> Result<(), DisplayError> {
        self.write_window().await
    }

    fn begin_paged_frame(&mut self) {
        self.buffer.set_window(0, self.page_rows);
    }

    async fn next_page(&mut self) -> Result<bool, DisplayError> {
        let sent = self.write_window().await;
        let (top, rows) = self.buffer.window();

        if sent.is_err() || self.buffer.is_last_window() {
            // Rewind so the next frame starts from the first strip
            self.buffer.set_window(0, self.page_rows);
            return sent.map(|()| false);
        }

        self.buffer.set_window(top + rows, self.page_rows);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embassy_futures::block_on;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::vec::Vec;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Line {
        Command,
        Data,
    }

    #[derive(Debug, Default)]
    struct Bus {
        /// Bytes written with their DC state, while CS was asserted
        writes: Vec<(Line, u8)>,
        dc_high: bool,
        cs_low: bool,
        unselected_writes: usize,
        fail: bool,
    }

    type Shared = Rc<RefCell<Bus>>;

    struct MockSpi(Shared);

    impl embedded_hal::spi::ErrorType for MockSpi {
        type Error = embedded_hal::spi::ErrorKind;
    }

    impl SpiBus for MockSpi {
        async fn read(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
            words.fill(0);
            Ok(())
        }

        async fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
            let mut bus = self.0.borrow_mut();
            if bus.fail {
                return Err(embedded_hal::spi::ErrorKind::Other);
            }
            if !bus.cs_low {
                bus.unselected_writes += 1;
            }
            let line = if bus.dc_high { Line::Data } else { Line::Command };
            for &w in words {
                bus.writes.push((line, w));
            }
            Ok(())
        }

        async fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
            read.fill(0);
            self.write(write).await
        }

        async fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
            let copy: Vec<u8> = words.to_vec();
            self.write(&copy).await
        }

        async fn flush(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    #[derive(Clone, Copy)]
    enum Role {
        Dc,
        Cs,
        Rst,
    }

    struct MockPin(Shared, Role);

    impl embedded_hal::digital::ErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            let mut bus = self.0.borrow_mut();
            match self.1 {
                Role::Dc => bus.dc_high = false,
                Role::Cs => bus.cs_low = true,
                Role::Rst => {}
            }
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            let mut bus = self.0.borrow_mut();
            match self.1 {
                Role::Dc => bus.dc_high = true,
                Role::Cs => bus.cs_low = false,
                Role::Rst => {}
            }
            Ok(())
        }
    }

    struct NoDelay;

    impl DelayNs for NoDelay {
        async fn delay_ns(&mut self, _ns: u32) {}
    }

    type TestDriver = Ssd1322<MockSpi, MockPin, MockPin, MockPin, NoDelay>;

    fn driver(panel: &PanelConfig) -> (TestDriver, Shared) {
        let bus: Shared = Rc::new(RefCell::new(Bus::default()));
        let display = Ssd1322::new(
            MockSpi(bus.clone()),
            MockPin(bus.clone(), Role::Dc),
            MockPin(bus.clone(), Role::Cs),
            MockPin(bus.clone(), Role::Rst),
            NoDelay,
            panel,
        );
        (display, bus)
    }

    fn commands(bus: &Shared) -> Vec<u8> {
        bus.borrow()
            .writes
            .iter()
            .filter(|(line, _)| *line == Line::Command)
            .map(|&(_, b)| b)
            .collect()
    }

    fn data_len(bus: &Shared) -> usize {
        bus.borrow()
            .writes
            .iter()
            .filter(|(line, _)| *line == Line::Data)
            .count()
    }

    #[test]
    fn test_column_window_is_centred() {
        let (display, _) = driver(&PanelConfig::default());
        assert_eq!(display.columns(), (0x1C, 0x5B));
    }

    #[test]
    fn test_init_sequence() {
        let (mut display, bus) = driver(&PanelConfig::default());
        block_on(display.init()).unwrap();
        assert!(display.is_initialized());

        let cmds = commands(&bus);
        assert_eq!(cmds.first(), Some(&cmd::SET_COMMAND_LOCK));
        assert_eq!(cmds.last(), Some(&cmd::DISPLAY_ON));
        assert_eq!(cmds.len(), 21);

        // Contrast parameter follows its command on the data line
        let state = bus.borrow();
        let writes = &state.writes;
        let pos = writes
            .iter()
            .position(|&w| w == (Line::Command, cmd::SET_CONTRAST))
            .unwrap();
        assert_eq!(writes[pos + 1], (Line::Data, 159));
        assert_eq!(state.unselected_writes, 0);
    }

    #[test]
    fn test_present_before_init() {
        let (mut display, _) = driver(&PanelConfig::default());
        assert_eq!(
            block_on(display.present()),
            Err(DisplayError::NotInitialized)
        );
    }

    #[test]
    fn test_present_sends_full_frame() {
        let (mut display, bus) = driver(&PanelConfig::default());
        block_on(display.init()).unwrap();
        bus.borrow_mut().writes.clear();

        display.clear_buffer();
        block_on(display.present()).unwrap();

        let cmds = commands(&bus);
        assert_eq!(
            cmds,
            [cmd::SET_COLUMN_ADDR, cmd::SET_ROW_ADDR, cmd::WRITE_RAM]
        );
        // 2 column params + 2 row params + 64 rows of 128 bytes
        assert_eq!(data_len(&bus), 4 + 64 * 128);
        assert!(!bus.borrow().cs_low);
    }

    #[test]
    fn test_bitmap_and_text_land_in_buffer() {
        static DOT: [u8; 2] = [0b0000_0001, 0b0000_0010];
        let (mut display, _) = driver(&PanelConfig::default());
        display.clear_buffer();

        display.draw_bitmap(Position::new(2, 2), &Xbm::new(2, 2, &DOT));
        assert!(display.buffer().pixel(2, 2));
        assert!(!display.buffer().pixel(3, 2));
        assert!(display.buffer().pixel(3, 3));

        display.set_font(FontFace::Value);
        display.draw_text(Position::new(100, 20), "8");
        let lit = (100..110)
            .flat_map(|x| (20..40).map(move |y| (x, y)))
            .filter(|&(x, y)| display.buffer().pixel(x, y))
            .count();
        assert!(lit > 0);
        // Text is anchored at the top of the cell
        assert!((0..20).all(|y| !display.buffer().pixel(105, y)));
    }

    #[test]
    fn test_bitmap_overwrites_its_box_only() {
        static DOT: [u8; 2] = [0b0000_0001, 0b0000_0010];
        let (mut display, _) = driver(&PanelConfig::default());
        display.clear_buffer();
        display.buffer.set_pixel(3, 2, true);
        display.buffer.set_pixel(4, 2, true);

        display.draw_bitmap(Position::new(2, 2), &Xbm::new(2, 2, &DOT));
        assert!(display.buffer().pixel(2, 2));
        assert!(!display.buffer().pixel(3, 2));
        assert!(!display.buffer().pixel(2, 3));
        assert!(display.buffer().pixel(3, 3));
        // Just right of the bitmap box
        assert!(display.buffer().pixel(4, 2));
    }

    #[test]
    fn test_paged_frame_walks_strips() {
        let (mut display, bus) = driver(&PanelConfig::default());
        block_on(display.init()).unwrap();
        bus.borrow_mut().writes.clear();

        display.begin_paged_frame();
        assert_eq!(display.buffer().window(), (0, 16));

        let mut strips = 1;
        while block_on(display.next_page()).unwrap() {
            strips += 1;
            assert_eq!(display.buffer().window(), ((strips - 1) * 16, 16));
        }
        assert_eq!(strips, 4);
        // Rewound after the last strip
        assert_eq!(display.buffer().window(), (0, 16));
        assert_eq!(data_len(&bus), 4 * (4 + 16 * 128));
    }

    #[test]
    fn test_clear_buffer_restores_full_window() {
        let (mut display, _) = driver(&PanelConfig::default());
        display.begin_paged_frame();
        display.clear_buffer();
        assert!(display.buffer().is_full());
    }

    #[test]
    fn test_transfer_error_is_reported() {
        let (mut display, bus) = driver(&PanelConfig::default());
        block_on(display.init()).unwrap();
        bus.borrow_mut().fail = true;

        assert_eq!(
            block_on(display.present()),
            Err(DisplayError::Communication)
        );
        assert!(!bus.borrow().cs_low);

        display.begin_paged_frame();
        assert_eq!(
            block_on(display.next_page()),
            Err(DisplayError::Communication)
        );
        assert_eq!(display.buffer().window(), (0, 16));
    }
}
