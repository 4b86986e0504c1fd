use nalgebra::Vector4;

// 화면 버퍼: 빨강이 최하위 바이트. 리틀 엔디언에서 바이트로 보면 R, G, B, A 순서
pub fn vec4_to_rgba(color: &Vector4<f32>) -> u32 {
    let r = (color.x * 255.0) as u8 as u32;
    let g = (color.y * 255.0) as u8 as u32;
    let b = (color.z * 255.0) as u8 as u32;
    let a = (color.w * 255.0) as u8 as u32;

    (a << 24) | (b << 16) | (g << 8) | r
}

// 스카이박스 저장 형식: A<<24 | R<<16 | G<<8 | B
pub fn rgba_bytes_to_argb(rgba: [u8; 4]) -> u32 {
    let [r, g, b, a] = rgba.map(u32::from);
    (a << 24) | (r << 16) | (g << 8) | b
}

pub fn argb_to_vec4(color: u32) -> Vector4<f32> {
    let r = (color >> 16) & 0xFF;
    let g = (color >> 8) & 0xFF;
    let b = color & 0xFF;
    let a = (color >> 24) & 0xFF;

    Vector4::new(r as f32, g as f32, b as f32, a as f32) / 255.0
}
