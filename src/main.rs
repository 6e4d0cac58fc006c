// On unix the std runtime is bypassed: its startup reopens a closed stdout on
// /dev/null, which would turn a failed emission into a success.
#![cfg_attr(unix, no_main)]

use hello_fixture::core::stdout;
use hello_fixture::utils::logger;
use hello_fixture::Emitter;

fn run() -> u8 {
    logger::init_cli_logger();

    let mut emitter = Emitter::new(stdout::channel());

    match emitter.emit() {
        Ok(written) => {
            tracing::debug!("Message written ({} bytes)", written);
            0
        }
        Err(e) => {
            tracing::debug!("{}", e);
            e.exit_code()
        }
    }
}

#[cfg(unix)]
#[no_mangle]
pub extern "C" fn main(_argc: libc::c_int, _argv: *const *const libc::c_char) -> libc::c_int {
    // A reader that went away must surface as EPIPE, not kill the process.
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_IGN);
    }

    libc::c_int::from(run())
}

#[cfg(not(unix))]
fn main() -> std::process::ExitCode {
    std::process::ExitCode::from(run())
}
