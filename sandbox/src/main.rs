use colored::{ColoredString, Colorize};
use glm::{distance, length, Matrix4, Vector2, Vector3, Vector4};
use std::fmt::Display;

const TIME_STEP: f32 = 1.0 / 60.0;
const STEP_COUNT: usize = 3;

fn log(tag: ColoredString, message: impl Display) {
    println!("[{}]:{}", tag.bold(), message);
}

fn info(message: impl Display) {
    log("INFO".blue(), message);
}

fn warn(message: impl Display) {
    log("WARNING".yellow(), message);
}

fn transform_pipeline() {
    let scale = Matrix4::diagonal(2.0);
    let point = Vector4::new(1.0, 0.5, -1.0, 1.0);
    info(format!("{:?} * {:?} = {:?}", scale, point, scale * point));

    // Round trip through the byte layout used for uniform uploads.
    let bytes = bytemuck::bytes_of(&scale).to_vec();
    let uploaded: Matrix4 = bytemuck::pod_read_unaligned(&bytes);
    info(format!(
        "decoded {} bytes, basis x = {:?}",
        bytes.len(),
        uploaded.row(0)
    ));

    let truncated = &bytes[..bytes.len() - 4];
    if let Err(error) = bytemuck::try_pod_read_unaligned::<Matrix4>(truncated) {
        warn(format!("truncated upload rejected: {:?}", error));
    }
}

fn integrate_forces() {
    let forces = [
        Vector3::new(0.0, 0.0, -9.81),
        Vector3::new(1.5, 0.0, 0.0),
        Vector3::new(0.0, -0.5, 2.0),
    ];
    let net = forces.iter().fold(Vector3::zero(), |acc, &f| acc + f);
    info(format!("net force {:?}, magnitude {}", net, net.length()));

    let origin = Vector3::zero();
    let mut position = origin;
    let mut velocity = Vector3::zero();
    for step in 0..STEP_COUNT {
        velocity = velocity + net * TIME_STEP;
        position = position + velocity * TIME_STEP;
        info(format!(
            "step {}: position {:?}, travelled {}",
            step,
            position,
            distance(origin, position)
        ));
    }
    if !position.is_valid() {
        warn("integration produced a non-finite position");
    }
}

fn main() {
    transform_pipeline();
    integrate_forces();
    let uv = Vector2::new(3.0, 4.0);
    info(format!("|{:?}| = {}", uv, length(uv)));
}
