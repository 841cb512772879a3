use http::{header, StatusCode};
use simple_server::Server;

use crate::render::{render_json, render_text};
use crate::types::SharedDashboard;

pub struct Reply {
    pub status: StatusCode,
    pub content_type: &'static str,
    pub body: String,
}

pub fn route(path: &str, dashboard: &SharedDashboard) -> Reply {
    let dashboard = dashboard.lock().unwrap();

    match path {
        "/" => Reply {
            status: StatusCode::OK,
            content_type: "text/plain; charset=utf-8",
            body: render_text(&dashboard),
        },
        "/dashboard" => match render_json(&dashboard) {
            Ok(body) => Reply {
                status: StatusCode::OK,
                content_type: "application/json",
                body,
            },
            Err(e) => {
                error!("Failed to encode dashboard {:?}", e);
                Reply {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    content_type: "text/plain; charset=utf-8",
                    body: format!("failed to encode dashboard: {}", e),
                }
            }
        },
        other => Reply {
            status: StatusCode::NOT_FOUND,
            content_type: "text/plain; charset=utf-8",
            body: format!("unhandled uri: {}", other),
        },
    }
}

pub fn run_server(listen_address: &str, port: u16, dashboard: SharedDashboard) -> ! {
    let server = Server::new(move |request, mut response| {
        let reply = route(request.uri().path(), &dashboard);
        debug!("{} {} -> {}", request.method(), request.uri().path(), reply.status);

        response.status(reply.status);
        response.header(header::CONTENT_TYPE, reply.content_type);
        response.header(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*");
        Ok(response.body(reply.body.into_bytes())?)
    });

    info!("Starting http server: http://{}:{}", listen_address, port);
    server.listen(listen_address, &format!("{}", port))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::Dashboard;
    use crate::types::MetricsSnapshot;
    use std::sync::{Arc, Mutex};

    fn shared() -> SharedDashboard {
        let mut dashboard = Dashboard::new();
        dashboard.apply(&MetricsSnapshot {
            room_temp: 20.,
            room_humidity: 50.,
            ds_temp: 36.5,
            heart_rate: 80.,
            spo2: 99.,
        }, "08:15:00");
        Arc::new(Mutex::new(dashboard))
    }

    #[test]
    fn index_is_text() {
        let reply = route("/", &shared());
        assert_eq!(reply.status, StatusCode::OK);
        assert!(reply.content_type.starts_with("text/plain"));
        assert!(reply.body.contains("Room humidity     50.0 %"));
    }

    #[test]
    fn dashboard_is_json() {
        let reply = route("/dashboard", &shared());
        assert_eq!(reply.status, StatusCode::OK);
        assert_eq!(reply.content_type, "application/json");
        let json: serde_json::Value = serde_json::from_str(&reply.body).unwrap();
        assert_eq!(json["charts"]["spo2"]["data"][0], 99.);
    }

    #[test]
    fn unknown_path_is_not_found() {
        let reply = route("/data/temperature", &shared());
        assert_eq!(reply.status, StatusCode::NOT_FOUND);
        assert_eq!(reply.body, "unhandled uri: /data/temperature");
    }
}
