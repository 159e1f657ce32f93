//! Outbound-IP discovery.

use std::net::{IpAddr, UdpSocket};

/// Well-known public endpoint used to select a route. No datagram is ever
/// sent to it; connecting a UDP socket only asks the kernel which local
/// address it would use as source.
const PROBE_ADDR: &str = "8.8.8.8:80";

/// Determine the primary outbound-facing IP of this machine.
///
/// Returns `None` when no route can be selected (no network, no default
/// route). The socket is dropped as soon as the local address is read.
pub fn outbound_ip() -> Option<IpAddr> {
    let socket = match UdpSocket::bind("0.0.0.0:0") {
        Ok(socket) => socket,
        Err(err) => {
            tracing::warn!("Failed to open outbound-IP probe socket: {err}");
            return None;
        }
    };
    if let Err(err) = socket.connect(PROBE_ADDR) {
        tracing::warn!("Failed to select outbound route: {err}");
        return None;
    }
    match socket.local_addr() {
        Ok(addr) => Some(addr.ip()),
        Err(err) => {
            tracing::warn!("Failed to read local address of probe socket: {err}");
            None
        }
    }
}
