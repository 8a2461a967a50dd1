//! Single-instance coordination.
//!
//! The first instance binds a loopback port and listens; a second launch
//! finds the port taken, asks the running instance to show its window, and
//! exits. The lock disappears with the process, so a crash never leaves a
//! stale lock behind.

use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};

/// Loopback port claimed by the running instance.
pub const INSTANCE_PORT: u16 = 38647;

const SHOW_COMMAND: &str = "show";

/// Outcome of claiming the instance lock.
pub enum InstanceGuard {
    /// This process owns the lock; keep the listener alive.
    Primary(TcpListener),
    /// Another instance is running and has been asked to show itself.
    Secondary,
}

/// Claim the instance lock on the default port.
pub fn acquire() -> InstanceGuard {
    acquire_on(INSTANCE_PORT)
}

/// Claim the instance lock on a specific port.
pub fn acquire_on(port: u16) -> InstanceGuard {
    match TcpListener::bind(("127.0.0.1", port)) {
        Ok(listener) => InstanceGuard::Primary(listener),
        Err(_) => {
            if let Ok(mut stream) = TcpStream::connect(("127.0.0.1", port)) {
                let _ = writeln!(stream, "{}", SHOW_COMMAND);
            }
            InstanceGuard::Secondary
        }
    }
}

/// Watch the lock for show requests from later launches.
pub fn spawn_listener<F>(listener: TcpListener, on_show: F)
where
    F: Fn() + Send + 'static,
{
    std::thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let mut line = String::new();
            let mut reader = BufReader::new(stream);
            if reader.read_line(&mut line).is_ok() && line.trim() == SHOW_COMMAND {
                log::info!("Second instance requested window show");
                on_show();
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::time::Duration;

    #[test]
    fn test_second_acquire_notifies_primary() {
        // Bind an ephemeral port so parallel test runs don't collide.
        let listener = TcpListener::bind(("127.0.0.1", 0)).unwrap();
        let port = listener.local_addr().unwrap().port();

        let (tx, rx) = mpsc::channel();
        spawn_listener(listener, move || {
            let _ = tx.send(());
        });

        match acquire_on(port) {
            InstanceGuard::Secondary => {}
            InstanceGuard::Primary(_) => panic!("expected the port to be taken"),
        }

        rx.recv_timeout(Duration::from_secs(2))
            .expect("primary never saw the show request");
    }

    #[test]
    fn test_first_acquire_is_primary() {
        let listener = TcpListener::bind(("127.0.0.1", 0)).unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        match acquire_on(port) {
            InstanceGuard::Primary(_) => {}
            InstanceGuard::Secondary => panic!("port should have been free"),
        }
    }
}
