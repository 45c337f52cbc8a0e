use std::net::{IpAddr, Ipv6Addr};

const UNKNOWN_IP: &str = "0.0.0.0";

/// Resolves the caller IP from proxy headers, falling back to the peer address.
///
/// The first entry of `x-forwarded-for` wins, then `x-real-ip`, then the socket
/// peer. Empty header values and an empty first forwarded entry are skipped. Returns `"0.0.0.0"` when nothing is
/// known.
#[must_use]
pub fn client_ip(
    forwarded_for: Option<&str>,
    real_ip: Option<&str>,
    peer: Option<IpAddr>,
) -> String {
    if let Some(first) = forwarded_for
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|first| !first.is_empty())
    {
        return first.to_owned();
    }

    if let Some(real_ip) = real_ip.filter(|value| !value.is_empty()) {
        return real_ip.to_owned();
    }

    peer.map_or_else(|| UNKNOWN_IP.to_owned(), |addr| addr.to_string())
}

/// Whether `ip` is loopback or in a private / link-local range.
///
/// Handles IPv4-mapped IPv6 (`::ffff:10.0.0.1`) and the literal `localhost`.
/// Strings that do not parse as an address are treated as public.
#[must_use]
pub fn is_private_ip(ip: &str) -> bool {
    let ip = ip.trim();
    let ip = ip.strip_prefix("::ffff:").unwrap_or(ip);

    if ip.eq_ignore_ascii_case("localhost") {
        return true;
    }

    match ip.parse::<IpAddr>() {
        Ok(IpAddr::V4(v4)) => v4.is_loopback() || v4.is_private(),
        Ok(IpAddr::V6(v6)) => v6.is_loopback() || is_link_local(&v6) || is_unique_local(&v6),
        Err(_) => false,
    }
}

// fe80::/10
fn is_link_local(ip: &Ipv6Addr) -> bool {
    ip.segments()[0] & 0xffc0 == 0xfe80
}

// fc00::/7
fn is_unique_local(ip: &Ipv6Addr) -> bool {
    ip.segments()[0] & 0xfe00 == 0xfc00
}

#[cfg(test)]
mod tests {
    use std::net::Ipv4Addr;

    use super::*;

    #[test]
    fn loopback_and_localhost_are_private() {
        for ip in ["127.0.0.1", "::1", "localhost", "::ffff:127.0.0.1"] {
            assert!(is_private_ip(ip), "{ip}");
        }
    }

    #[test]
    fn rfc1918_ranges_are_private() {
        for ip in [
            "10.0.0.1",
            "172.16.5.4",
            "172.31.255.255",
            "192.168.1.10",
            "::ffff:10.1.2.3",
        ] {
            assert!(is_private_ip(ip), "{ip}");
        }
    }

    #[test]
    fn neighbouring_public_ranges_are_not_private() {
        for ip in ["172.15.0.1", "172.32.0.1", "192.169.0.1", "8.8.8.8", "11.0.0.1"] {
            assert!(!is_private_ip(ip), "{ip}");
        }
    }

    #[test]
    fn ipv6_local_ranges_are_private() {
        for ip in ["fe80::1", "fc00::1", "fd12:3456::1"] {
            assert!(is_private_ip(ip), "{ip}");
        }
        assert!(!is_private_ip("2001:4860:4860::8888"));
    }

    #[test]
    fn garbage_is_treated_as_public() {
        assert!(!is_private_ip("not-an-ip"));
        assert!(!is_private_ip(""));
    }

    #[test]
    fn client_ip_prefers_first_forwarded_entry() {
        let ip = client_ip(Some(" 203.0.113.7 , 10.0.0.1"), Some("198.51.100.2"), None);
        assert_eq!(ip, "203.0.113.7");
    }

    #[test]
    fn client_ip_falls_back_to_real_ip_then_peer() {
        assert_eq!(client_ip(Some(""), Some("198.51.100.2"), None), "198.51.100.2");
        let peer = IpAddr::V4(Ipv4Addr::new(192, 0, 2, 1));
        assert_eq!(client_ip(None, None, Some(peer)), "192.0.2.1");
        assert_eq!(client_ip(None, None, None), "0.0.0.0");
    }

    #[test]
    fn client_ip_skips_empty_first_forwarded_entry() {
        assert_eq!(client_ip(Some(" , 10.0.0.1"), Some("198.51.100.2"), None), "198.51.100.2");
        let peer = IpAddr::V4(Ipv4Addr::new(192, 0, 2, 1));
        assert_eq!(client_ip(Some(","), None, Some(peer)), "192.0.2.1");
    }
}
