use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_dns_port")]
    pub dns_port: u16,

    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Seconds a TCP connection may sit without completing a frame.
    #[serde(default = "default_tcp_idle_timeout")]
    pub tcp_idle_timeout: u64,

    #[serde(default = "default_udp_buffer_size")]
    pub udp_buffer_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            dns_port: default_dns_port(),
            bind_address: default_bind_address(),
            tcp_idle_timeout: default_tcp_idle_timeout(),
            udp_buffer_size: default_udp_buffer_size(),
        }
    }
}

fn default_dns_port() -> u16 {
    53
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_tcp_idle_timeout() -> u64 {
    10
}

fn default_udp_buffer_size() -> usize {
    4096
}
