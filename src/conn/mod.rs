use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::UdpSocket;

use crate::buffer::PACKET_SIZE;
use crate::config::*;
use crate::error::*;
use crate::message::*;


const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// DnsConn sends one query at a time to a resolving server over UDP and
/// waits for its response.
///
/// There is no retry: a lost datagram surfaces as [`Error::ErrTimeout`].
pub struct DnsConn {
    socket: UdpSocket,
    server: SocketAddr,
    timeout: Duration,
}

impl DnsConn {
    /// bind opens the client socket described by config.
    pub async fn bind(config: Config) -> Result<Self> {
        let socket = UdpSocket::bind(config.local_addr).await?;
        log::trace!(
            "bound {:?}, resolving through {}",
            socket.local_addr(),
            config.server
        );

        Ok(DnsConn {
            socket,
            server: config.server,
            timeout: if config.timeout != Duration::from_secs(0) {
                config.timeout
            } else {
                DEFAULT_TIMEOUT
            },
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.socket.local_addr()?)
    }

    /// query asks the server for the typ records of name, with a random id
    /// and recursion desired.
    pub async fn query(&self, name: &str, typ: DnsType) -> Result<Message> {
        let mut msg = Message::query(rand::random(), name, typ);
        self.exchange(&mut msg).await
    }

    /// exchange sends msg and returns the decoded response. Only a datagram
    /// from the server is accepted, and its id must match the id of msg.
    pub async fn exchange(&self, msg: &mut Message) -> Result<Message> {
        let raw = msg.pack()?;
        log::trace!("sending {} bytes to {}", raw.len(), self.server);
        self.socket.send_to(&raw, self.server).await?;

        let mut buf = [0u8; PACKET_SIZE];
        // Datagrams from anyone but the server are dropped; they still count
        // against the timeout.
        let recv = async {
            loop {
                let (n, src) = self.socket.recv_from(&mut buf).await?;
                if src == self.server {
                    return Ok::<usize, Error>(n);
                }
                log::debug!("dropping {} bytes from unexpected source {}", n, src);
            }
        };
        let n = match tokio::time::timeout(self.timeout, recv).await {
            Ok(result) => result?,
            Err(_) => {
                log::warn!(
                    "no response from {} within {:?} for id {}",
                    self.server,
                    self.timeout,
                    msg.header.id
                );
                return Err(Error::ErrTimeout);
            }
        };
        log::trace!("received {} bytes from {}", n, self.server);

        let response = decode(&buf[..n])?;
        if response.header.id != msg.header.id {
            return Err(Error::ErrIdMismatch {
                want: msg.header.id,
                got: response.header.id,
            });
        }

        Ok(response)
    }
}
