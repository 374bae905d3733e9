use kiss3d::{
    event::{
        Action,
        Key,
        WindowEvent
    },
    light::Light,
    nalgebra::Point3,
    window::Window
};
use log::{
    error,
    info
};
use meshtrail::{
    graphics::{
        trail::Trail,
        Graphics
    },
    history::settings::TrailSettings,
    scene::{
        node::Node,
        Scene
    }
};
use std::env;
fn main() {
    env_logger::init();
    let mut flags: Vec<Option<String>> = vec!(None; 2);
    let mut local = false;
    let flag = "get".to_string();
    for arg in env::args().skip(1) {
        if flags[0] == Some(flag.clone()) {
            flags[0] = Some(arg)
        } else if flags[1] == Some(flag.clone()) {
            flags[1] = Some(arg)
        } else {
            match arg.as_str() {
                "-L" => flags[0] = Some(flag.clone()),
                "-S" => flags[1] = Some(flag.clone()),
                "--local" => local = true,
                _ => info!("Ignoring argument {}", arg)
            }
        }
    }
    let mut settings = match &flags[0] {
        Some(x) => match TrailSettings::load_json(x) {
            Ok(x) => x,
            Err(x) => {
                error!("Failed to load settings, using defaults\n{}", x);
                TrailSettings::default()
            }
        },
        None => TrailSettings::default()
    };
    settings.local = settings.local || local;
    let mut scene = Scene::new();
    scene.add(Node::new("hub".to_string(), [0.0, 0.0, 0.0]).with_spin([0.0, 1.0, 0.0]));
    if let Err(x) = scene.add_child(0, Node::new("arm".to_string(), [2.0, 0.0, 0.0]).with_spin([0.0, 0.0, 3.0])) {
        error!("Failed to build scene!\n{}", x);
        return
    }
    let target = match scene.add_child(1, Node::new("tip".to_string(), [0.0, 0.75, 0.0])) {
        Ok(x) => x,
        Err(x) => {
            error!("Failed to build scene!\n{}", x);
            return
        }
    };
    info!("Tracking tip of a {} node scene", scene.size());
    let mut window = Window::new("Kiss3d: decaying trail");
    window.set_light(Light::StickToCamera);
    let size = window.size();
    let trail = match Trail::new(&settings, Some(target), (size.x, size.y)) {
        Ok(x) => x.with_attenuation(|t| t * t),
        Err(x) => {
            error!("Failed to create trail!\n{}", x);
            return
        }
    };
    let eye = Point3::new(0.0f32, 4.0, -6.0);
    let at = Point3::origin();
    let mut graphics = Graphics::new(trail, eye, at, 0.08, &mut window.add_group());
    let delta_time = 1.0 / 60.0;
    while window.render_with_camera(graphics.camera()) {
        for event in window.events().iter() {
            match event.value {
                WindowEvent::FramebufferSize(width, height) => graphics.trail_mut().on_viewport_resized(width, height),
                WindowEvent::Key(Key::F, Action::Press, _) => graphics.toggle_follow(),
                WindowEvent::Key(button, Action::Press, _) => {
                    let trail = graphics.trail_mut();
                    let decay = trail.history().decay();
                    let length = trail.history().length();
                    let result = match button {
                        Key::Equals => trail.on_decay_changed(decay + 0.25),
                        Key::Minus => trail.on_decay_changed((decay - 0.25).max(0.0)),
                        Key::RBracket => trail.on_length_changed(length + 0.5),
                        Key::LBracket => trail.on_length_changed((length - 0.5).max(0.5)),
                        Key::L => {
                            let local = !trail.history().local();
                            trail.on_local_changed(local);
                            Ok(())
                        },
                        Key::A => {
                            let material = trail.material_mut();
                            let size_attenuation = !material.size_attenuation();
                            material.set_size_attenuation(size_attenuation);
                            Ok(())
                        },
                        _ => Ok(())
                    };
                    if let Err(x) = result {
                        error!("{}", x)
                    }
                },
                _ => ()
            }
        }
        if let Err(x) = scene.step(delta_time) {
            error!("Failed to step scene!\n{}", x);
            break
        }
        if let Err(x) = graphics.update().and_then(|_| graphics.draw(&mut window)) {
            error!("Failed to update trail!\n{}", x);
            break
        }
    };
    settings.decay = graphics.trail().history().decay();
    settings.length = graphics.trail().history().length();
    settings.local = graphics.trail().history().local();
    if let Some(x) = &flags[1] {
        match settings.save_json(x) {
            Ok(_) => info!("Saved settings to {}", x),
            Err(y) => error!("Failed to save {}!\n{}", x, y)
        }
    }
}
