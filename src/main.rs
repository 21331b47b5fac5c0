use clap::Parser;
use parse_display::{Display, FromStr};
use tokio::net::{TcpListener, TcpStream};
use tracing::{error, info, warn};
use utm_wire::{
    transport::{read_message, write_message},
    ByteOrder, Header, Message, PositionUtm, Status,
};

#[derive(Parser)]
struct App {
    kind: Kind,

    /// Address to listen on or connect to
    #[clap(long, default_value = "localhost:2777")]
    addr: String,

    /// Position samples the server sends per connection
    #[clap(long, default_value_t = 6)]
    count: u8,
}

#[derive(Display, FromStr, PartialEq, Debug)]
#[display(style = "snake_case")]
enum Kind {
    Client,
    Server,
}

const SERVER_MBX: u32 = 0x0000_0100;
const CLIENT_MBX: u32 = 0x0000_0200;

#[tokio::main]
async fn main() -> Result<(), color_eyre::Report> {
    color_eyre::install()?;
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    let app = App::parse();
    match app.kind {
        Kind::Client => run_client(&app.addr).await,
        Kind::Server => run_server(&app.addr, app.count).await,
    }
}

async fn run_server(addr: &str, count: u8) -> Result<(), color_eyre::Report> {
    let ln = TcpListener::bind(addr).await?;
    info!("Listening on {addr}");

    loop {
        let (stream, addr) = ln.accept().await?;
        info!(%addr, "Accepted connection");

        tokio::spawn(async move {
            if let Err(e) = handle_client(stream, count).await {
                error!(%e, "Error while handling client conn")
            }
        });
    }
}

async fn handle_client(mut stream: TcpStream, count: u8) -> Result<(), color_eyre::Report> {
    let mut header = Header {
        dest: CLIENT_MBX,
        src: SERVER_MBX,
        ..Header::default()
    };

    for i in 0..count {
        header.seq_nr = i;
        let sample = PositionUtm::new(
            32,
            5_800_000_000.0 + f64::from(i) * 1_000.0,
            600_000_000.0 - f64::from(i) * 500.0,
            150,
            1.5708,
        );
        write_message(&mut stream, header, &Message::PositionUtm(sample)).await?;
    }

    header.seq_nr = count;
    write_message(&mut stream, header, &Message::Status(Status::Ok)).await?;
    Ok(())
}

async fn run_client(addr: &str) -> Result<(), color_eyre::Report> {
    info!(native = %ByteOrder::native(), "Connecting to {addr}");
    let mut stream = TcpStream::connect(addr).await?;

    loop {
        let (header, message) = read_message(&mut stream).await?;
        match message {
            Message::PositionUtm(p) => info!(
                seq_nr = header.seq_nr,
                "Got position: zone {}, northing {} mm, easting {} mm, altitude {} mm, heading {} rad",
                p.zone,
                p.northing,
                p.easting,
                p.altitude,
                p.heading
            ),
            Message::Status(Status::Ok) => {
                info!(seq_nr = header.seq_nr, "Server done");
                return Ok(());
            }
            Message::Status(status) => {
                warn!(%status, seq_nr = header.seq_nr, "Server replied with status");
                return Ok(());
            }
        }
    }
}
