/// Arrow-key rotation as `(delta_yaw, delta_pitch)` for a step of `step_deg`.
#[inline]
pub fn rotation_for_key(key: &str, step_deg: f32) -> Option<(f32, f32)> {
    match key {
        "ArrowLeft" => Some((-step_deg, 0.0)),
        "ArrowRight" => Some((step_deg, 0.0)),
        "ArrowUp" => Some((0.0, -step_deg)),
        "ArrowDown" => Some((0.0, step_deg)),
        _ => None,
    }
}
