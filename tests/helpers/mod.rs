// 集成测试共享辅助模块; 各测试文件只用到其中一部分
#![allow(dead_code)]

pub mod mock_config;
pub mod test_data_builder;
