//! zonemux infrastructure: the hickory-backed wire codec and the UDP/TCP
//! listeners that feed parsed queries to a [`Nameserver`](zonemux_application::Nameserver).
pub mod dns;
