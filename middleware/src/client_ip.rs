use std::{
    fmt::Display,
    net::{IpAddr, SocketAddr},
    str::FromStr,
};

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{Request, Response, header::FORWARDED},
    middleware::Next,
};
use forwarded_header_value::{ForwardedHeaderValue, Identifier};

/// Resolved address of the caller, stored as a request extension by [`mw_client_ip`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientIp(pub Option<IpAddr>);

impl Display for ClientIp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(ip) => write!(f, "{ip}"),
            None => Ok(()),
        }
    }
}

pub async fn mw_client_ip(mut request: Request<Body>, next: Next) -> Response<Body> {
    let ip = ClientIp(client_ip(&request));
    request.extensions_mut().insert(ip);
    next.run(request).await
}

fn client_ip<B>(request: &Request<B>) -> Option<IpAddr> {
    request
        .headers()
        .get(FORWARDED)
        .and_then(|val| val.to_str().ok())
        .and_then(|val| ForwardedHeaderValue::from_str(val).ok())
        .map(|forwarded| forwarded.into_remotest())
        .and_then(|stanza| stanza.forwarded_for)
        .and_then(|identifier| match identifier {
            Identifier::SocketAddr(socket_addr) => Some(socket_addr.ip()),
            Identifier::IpAddr(ip_addr) => Some(ip_addr),
            _ => None,
        })
        .or_else(|| {
            request
                .extensions()
                .get::<ConnectInfo<SocketAddr>>()
                .map(|connect_info| connect_info.0.ip())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> axum::http::request::Builder {
        Request::builder().uri("/")
    }

    #[test]
    fn forwarded_header_wins() {
        let request = request()
            .header(FORWARDED, "for=192.0.2.60;proto=http;by=203.0.113.43")
            .body(())
            .unwrap();
        assert_eq!(client_ip(&request), Some("192.0.2.60".parse().unwrap()));
    }

    #[test]
    fn falls_back_to_peer_address() {
        let mut request = request().body(()).unwrap();
        request
            .extensions_mut()
            .insert(ConnectInfo(SocketAddr::from(([10, 0, 0, 7], 51234))));
        assert_eq!(client_ip(&request), Some("10.0.0.7".parse().unwrap()));
    }

    #[test]
    fn unknown_caller_displays_as_empty() {
        let request = request().body(()).unwrap();
        let ip = ClientIp(client_ip(&request));
        assert_eq!(ip, ClientIp(None));
        assert_eq!(ip.to_string(), "");
    }
}
