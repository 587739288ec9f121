//! 共享测试工具和辅助函数

#![allow(dead_code)]

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// 跳过测试的宏（当设置了离线环境变量时）
#[macro_export]
macro_rules! skip_if_offline {
    () => {
        if std::env::var("SWAPI_OFFLINE").is_ok() {
            eprintln!("跳过测试: 设置了 SWAPI_OFFLINE");
            return;
        }
    };
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 本地一次性 HTTP 应答器
///
/// 接受一个连接，读取请求头，返回预设响应后关闭连接。
pub struct OneShotServer {
    /// 形如 `http://127.0.0.1:PORT/api` 的基础地址
    pub base_url: String,
    /// 完成后返回收到的请求行（如 `GET /api/people/?page=1 HTTP/1.1`）
    pub request_line: JoinHandle<String>,
}

/// 启动一个返回指定状态码和 JSON 响应体的服务
pub async fn serve_once(status: u16, body: impl Into<String>) -> OneShotServer {
    let body = body.into();
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("绑定本地端口失败");
    let addr = listener.local_addr().expect("获取本地地址失败");

    let request_line = tokio::spawn(async move {
        let Ok((mut socket, _)) = listener.accept().await else {
            return String::new();
        };

        let mut received = Vec::new();
        let mut buf = [0_u8; 1024];
        while !received.windows(4).any(|w| w == b"\r\n\r\n") {
            match socket.read(&mut buf).await {
                Ok(0) | Err(_) => break,
                Ok(n) => received.extend_from_slice(&buf[..n]),
            }
        }

        let response = format!(
            "HTTP/1.1 {status} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            reason_phrase(status),
            body.len()
        );
        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.shutdown().await;

        String::from_utf8_lossy(&received)
            .lines()
            .next()
            .unwrap_or_default()
            .to_string()
    });

    OneShotServer {
        base_url: format!("http://{addr}/api"),
        request_line,
    }
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        _ => "Unknown",
    }
}

/// 生成一个包含 `n` 个人物的页面 JSON
pub fn people_page_json(n: usize, next: Option<&str>) -> String {
    let results: Vec<String> = (1..=n)
        .map(|i| {
            format!(
                r#"{{
                    "name": "Character {i}",
                    "height": "{height}",
                    "mass": "{mass}",
                    "hair_color": "n/a",
                    "skin_color": "n/a",
                    "eye_color": "n/a",
                    "birth_year": "{i}BBY",
                    "gender": "n/a",
                    "homeworld": "https://swapi.dev/api/planets/1/",
                    "films": ["https://swapi.dev/api/films/1/"],
                    "species": [],
                    "vehicles": [],
                    "starships": [],
                    "created": "2014-12-09T13:50:51.644000Z",
                    "edited": "2014-12-20T21:17:56.891000Z",
                    "url": "https://swapi.dev/api/people/{i}/"
                }}"#,
                height = 150 + i,
                mass = 60 + i,
            )
        })
        .collect();

    let next = next.map_or_else(|| "null".to_string(), |n| format!("\"{n}\""));
    format!(
        r#"{{"count": 82, "next": {next}, "previous": null, "results": [{}]}}"#,
        results.join(",")
    )
}
