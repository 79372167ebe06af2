//! Addresses and ports

use super::{join, Colorizers};
use crate::cache;

impl Colorizers {
    /// IPv4 address colored by the average of its octets, so neighbouring
    /// addresses share a hue.
    pub fn ipv4(&self, ip: &str) -> String {
        self.wrap(ip, self.color_for_ipv4(ip))
    }

    pub fn ipv4s<S: AsRef<str>>(&self, ips: &[S]) -> String {
        join(ips.iter().map(|ip| self.ipv4(ip.as_ref())))
    }

    /// Port number, spread over the hash range by `port / 65535`.
    pub fn port(&self, port: u16) -> String {
        self.wrap(&port.to_string(), cache::hash_port(port))
    }

    /// `ip:port` with both halves colored.
    pub fn addr(&self, ip: &str, port: u16) -> String {
        format!("{}:{}", self.ipv4(ip), self.port(port))
    }

    /// Parse `host:port` and color it like [`addr`](Self::addr).
    ///
    /// Anything without a numeric port is highlighted as a whole.
    pub fn addr_str(&self, addr: &str) -> String {
        match addr.rsplit_once(':') {
            Some((host, port)) => match port.parse::<u16>() {
                Ok(port) => self.addr(host, port),
                Err(_) => self.highlight(&[addr]),
            },
            None => self.highlight(&[addr]),
        }
    }
}
