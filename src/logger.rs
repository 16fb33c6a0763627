//! 消息日志
//!
//! `MessageLog` 实现了 `log::Log`，只保留最近的几行，
//! 宿主程序把它们显示在屏幕旁边的面板里。

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

/// 日志行的共享缓冲区
#[derive(Clone, Debug)]
pub struct LogBuffer {
    lines: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    /// 追加一行，超出容量时丢弃最旧的
    pub fn push(&self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if let Ok(mut lines) = self.lines.lock() {
            while lines.len() >= self.capacity {
                lines.pop_front();
            }
            lines.push_back(line);
        }
    }

    /// 从旧到新的所有行
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.iter().cloned().collect())
            .unwrap_or_default()
    }
}

/// 写入 [`LogBuffer`] 的日志实现
pub struct MessageLog {
    buffer: LogBuffer,
    level: LevelFilter,
}

impl MessageLog {
    pub fn new(capacity: usize, level: LevelFilter) -> Self {
        Self {
            buffer: LogBuffer::new(capacity),
            level,
        }
    }

    pub fn buffer(&self) -> LogBuffer {
        self.buffer.clone()
    }

    /// 注册为全局 logger，返回缓冲区句柄
    pub fn install(self) -> Result<LogBuffer, SetLoggerError> {
        let buffer = self.buffer();
        let level = self.level;
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(level);
        Ok(buffer)
    }
}

impl Log for MessageLog {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.buffer
                .push(format!("{:<5} {}", record.level(), record.args()));
        }
    }

    fn flush(&self) {}
}
