pub const NEON_SHADER: &str = include_str!("../../shaders/neon.wgsl");
