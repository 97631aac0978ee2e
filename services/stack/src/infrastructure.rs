// インフラストラクチャ層モジュール
pub mod logging;
pub mod synth_config;
pub mod template_writer;

// 再エクスポート
pub use logging::init_logging;
pub use synth_config::SynthConfig;
pub use template_writer::{TemplateWriteError, template_file_name, write_template};
