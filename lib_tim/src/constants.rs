pub const FORMAT_NAME: &str = "TIM image";
pub const FILE_EXT: &str = "tim";
