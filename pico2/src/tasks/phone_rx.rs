//! Phone UART receive task.
//!
//! Reassembles link frames and hands complete payloads to the main loop.

use defmt::{trace, warn};
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;
use watchface_common::link::FrameParser;

use super::{EVENTS, Event};

/// Buffer size for UART reads
const RX_BUF_SIZE: usize = 64;

#[embassy_executor::task]
pub async fn phone_rx_task(mut rx: BufferedUartRx) {
    defmt::info!("Phone RX task started");

    let mut parser = FrameParser::new();
    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        let n = match rx.read(&mut buf).await {
            Ok(n) => n,
            Err(e) => {
                warn!("UART read error: {:?}", e);
                continue;
            },
        };
        trace!("RX: {} bytes", n);

        for &byte in &buf[..n] {
            match parser.feed(byte) {
                Ok(Some(payload)) => EVENTS.send(Event::Message(payload)).await,
                Ok(None) => {},
                Err(e) => warn!("Frame error: {}", e),
            }
        }
    }
}
