// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Stride Sandbox
// Runs a scripted walk-jump-turn sequence headless and logs the trajectory.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use stride_agents::locomotion_agent::LocomotionAgent;
use stride_core::math::Vec3;
use stride_core::{BodyMover, FrameContext};
use stride_data::{AnimatorParameters, LocomotionConfig};
use stride_infra::{PlaneBody, ScriptedInput};

#[derive(Parser, Debug)]
#[command(version, about = "Drive a locomotion agent over a flat floor")]
struct Args {
    /// RON file with locomotion tuning. Built-in defaults when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of frames to simulate.
    #[arg(short, long, default_value_t = 360)]
    frames: u64,

    /// Fixed frame time, in seconds.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Height the character spawns at.
    #[arg(long, default_value_t = 0.0)]
    spawn_height: f32,

    /// Floor vertical velocity at -terminal_velocity.
    #[arg(long)]
    clamp_fall_speed: bool,

    /// Log a status line every N frames.
    #[arg(long, default_value_t = 30)]
    report_every: u64,
}

/// Walk right, jump, turn around mid-run, jump again, then stop.
fn demo_script(frames: u64) -> ScriptedInput {
    let quarter = frames / 4;
    ScriptedInput::new()
        .hold_axis(0, 1.0)
        .press_jump(quarter)
        .hold_axis(quarter * 2, -1.0)
        .press_jump(quarter * 2 + quarter / 2)
        .hold_axis(quarter * 3, 0.0)
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    anyhow::ensure!(args.dt > 0.0, "--dt must be positive, got {}", args.dt);

    let mut config = match &args.config {
        Some(path) => LocomotionConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => LocomotionConfig::default(),
    };
    config.clamp_fall_speed |= args.clamp_fall_speed;

    let mut agent = LocomotionAgent::new(config).context("building locomotion agent")?;
    let mut input = demo_script(args.frames);
    let mut body = PlaneBody::new(Vec3::new(0.0, args.spawn_height, 0.0), 0.0);
    let probe = body.probe();
    let mut anim = AnimatorParameters::new();

    log::info!(
        "Sandbox: simulating {} frames at dt={:.4}s",
        args.frames,
        args.dt
    );

    for _ in 0..args.frames {
        body.begin_frame(args.dt);
        let mut frame = FrameContext::new(&input, &probe, &mut body, &mut anim);
        agent.tick(args.dt, &mut frame);

        if args.report_every > 0 && input.frame() % args.report_every == 0 {
            let position = body.position();
            log::info!(
                "frame {:>4}  x={:>7.3} y={:>6.3}  yaw={:>6.1}  speed={:.3}  vy={:>7.3}  \
                 grounded={} free_fall={}",
                input.frame(),
                position.x,
                position.y,
                body.yaw(),
                agent.state().horizontal_speed,
                agent.state().vertical_velocity,
                anim.grounded,
                anim.free_fall
            );
        }
        input.advance();
    }

    agent.set_enabled(false, &mut body);

    let position = body.position();
    log::info!(
        "Sandbox: finished at x={:.3} y={:.3} after {} moves, {} jump(s)",
        position.x,
        position.y,
        body.move_count(),
        anim.jumps_triggered
    );

    Ok(())
}
