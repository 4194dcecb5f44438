use ipnet::IpNet;
use std::net::IpAddr;
use tracing::debug;

/// Parses a CIDR string. Host bits may be set (`10.1.2.3/8` is `10.0.0.0/8`).
pub fn parse_cidr(cidr: &str) -> Option<IpNet> {
    cidr.trim().parse::<IpNet>().ok().map(|net| net.trunc())
}

/// Returns true iff `ip` falls inside `cidr`. Malformed input never matches.
pub fn contains(cidr: &str, ip: &str) -> bool {
    let Some(net) = parse_cidr(cidr) else {
        debug!(cidr, "ignoring unparseable network");
        return false;
    };
    let addr = match ip.trim().parse::<IpAddr>() {
        Ok(addr) => addr,
        Err(err) => {
            debug!(ip, error = %err, "ignoring unparseable client address");
            return false;
        }
    };
    net.contains(&addr)
}
