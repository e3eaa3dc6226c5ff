#![no_std]
#![no_main]

use button_monitor::{ButtonMonitor, DEFAULT_BAUD_RATE, MonitorConfig};
use esp_backtrace as _;
use esp_hal::delay::Delay;
use esp_hal::gpio::{Input, InputConfig, Io, Pull};
use esp_hal::main;
use esp_hal::uart::{Config as UartConfig, Uart};
use log::{LevelFilter, info};

use esp32_board::interrupt::{self, BUTTON, GpioEdgeInterrupt};
use esp32_board::serial::UartSink;
use esp32_board::time_source::EspTimeSource;

/// Polling interval (milliseconds)
const POLL_INTERVAL_MS: u32 = 10;

/// Log level for `esp-println`.
///
/// The classic ESP32 has no USB-Serial-JTAG, so logs go to UART0 alongside the
/// press reports; only warnings and panics are let through there. On the other
/// chips the boot banner is logged before the monitor starts, so anything that
/// lands on UART0 precedes the first report.
#[cfg(feature = "esp32")]
const LOG_LEVEL: LevelFilter = LevelFilter::Warn;
#[cfg(not(feature = "esp32"))]
const LOG_LEVEL: LevelFilter = LevelFilter::Info;

esp_bootloader_esp_idf::esp_app_desc!();

#[main]
fn main() -> ! {
    esp_println::logger::init_logger_from_env();
    log::set_max_level(LOG_LEVEL);

    let peripherals = esp_hal::init(esp_hal::Config::default());

    #[cfg(feature = "esp32s3")]
    let (button_pin, tx_pin) = (peripherals.GPIO38, peripherals.GPIO43);
    #[cfg(feature = "esp32")]
    let (button_pin, tx_pin) = (peripherals.GPIO0, peripherals.GPIO1);
    #[cfg(feature = "esp32c3")]
    let (button_pin, tx_pin) = (peripherals.GPIO9, peripherals.GPIO21);

    let uart = Uart::new(
        peripherals.UART0,
        UartConfig::default().with_baudrate(DEFAULT_BAUD_RATE),
    )
    .expect("Failed to configure UART0")
    .with_tx(tx_pin);

    let mut io = Io::new(peripherals.IO_MUX);
    io.set_interrupt_handler(interrupt::gpio_handler);

    let button = Input::new(button_pin, InputConfig::default().with_pull(Pull::Up));
    interrupt::install(button);

    info!("=== Button Monitor ===");
    info!(
        "Counting falling edges on {} for {} ms at {} baud",
        BUTTON.pin(),
        button_monitor::DEFAULT_TIMEOUT_MS,
        DEFAULT_BAUD_RATE
    );

    let time_source = EspTimeSource::new();
    let mut monitor = ButtonMonitor::new(
        &BUTTON,
        GpioEdgeInterrupt,
        UartSink::new(uart),
        &time_source,
        MonitorConfig::default(),
    );

    let delay = Delay::new();
    monitor.run(|| delay.delay_millis(POLL_INTERVAL_MS))
}
