//! ログ初期化
//!
//! `LEDGER_LOG` が設定されていればそのフィルタを使う。
//! ログは標準エラーへ出し、標準出力は表示結果だけにする。

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const LOG_ENV: &str = "LEDGER_LOG";

pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "product_ledger=debug,ledger=debug,info"
    } else {
        "warn"
    }
}

pub fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}
