// Application layer: the screening use case and the ports it depends on

pub mod console_summary;
pub mod ports;
pub mod screen_use_case;
