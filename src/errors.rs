use std::fmt;

#[derive(Debug, Clone)]
pub enum ScrapTradeError {
    DatabaseConfig(String),
    DatabaseConnection(String),
    DatabaseOperation(String),
    FileOperation(String),
    Validation(String),
    NotFound(String),
    Serialization(String),
}

impl ScrapTradeError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            ScrapTradeError::DatabaseConfig(_) => "E001",
            ScrapTradeError::DatabaseConnection(_) => "E002",
            ScrapTradeError::DatabaseOperation(_) => "E003",
            ScrapTradeError::FileOperation(_) => "E004",
            ScrapTradeError::Validation(_) => "E005",
            ScrapTradeError::NotFound(_) => "E006",
            ScrapTradeError::Serialization(_) => "E007",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            ScrapTradeError::DatabaseConfig(_) => "Database Configuration Error",
            ScrapTradeError::DatabaseConnection(_) => "Database Connection Error",
            ScrapTradeError::DatabaseOperation(_) => "Database Operation Error",
            ScrapTradeError::FileOperation(_) => "File Operation Error",
            ScrapTradeError::Validation(_) => "Validation Error",
            ScrapTradeError::NotFound(_) => "Resource Not Found",
            ScrapTradeError::Serialization(_) => "Serialization Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            ScrapTradeError::DatabaseConfig(msg) => msg,
            ScrapTradeError::DatabaseConnection(msg) => msg,
            ScrapTradeError::DatabaseOperation(msg) => msg,
            ScrapTradeError::FileOperation(msg) => msg,
            ScrapTradeError::Validation(msg) => msg,
            ScrapTradeError::NotFound(msg) => msg,
            ScrapTradeError::Serialization(msg) => msg,
        }
    }

    /// 格式化为彩色输出（用于 Server 模式）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ScrapTradeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ScrapTradeError {}

// 便捷的构造函数
impl ScrapTradeError {
    pub fn database_config<T: Into<String>>(msg: T) -> Self {
        ScrapTradeError::DatabaseConfig(msg.into())
    }

    pub fn database_connection<T: Into<String>>(msg: T) -> Self {
        ScrapTradeError::DatabaseConnection(msg.into())
    }

    pub fn database_operation<T: Into<String>>(msg: T) -> Self {
        ScrapTradeError::DatabaseOperation(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        ScrapTradeError::FileOperation(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        ScrapTradeError::Validation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        ScrapTradeError::NotFound(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        ScrapTradeError::Serialization(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for ScrapTradeError {
    fn from(err: sea_orm::DbErr) -> Self {
        ScrapTradeError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for ScrapTradeError {
    fn from(err: std::io::Error) -> Self {
        ScrapTradeError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for ScrapTradeError {
    fn from(err: serde_json::Error) -> Self {
        ScrapTradeError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ScrapTradeError>;
