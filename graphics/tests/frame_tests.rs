//! Full-frame integration tests.
//!
//! These drive the orchestrator against the instrumented [`DummyRecorder`]
//! and assert on the exact command journal a frame records.

use estuary_core::mesh::shapes::CylinderParams;
use estuary_core::mesh::MeshRegistry;
use estuary_graphics::{
    DummyRecorder, FrameContext, FrameError, PostProcessConfig, RecordedCommand, RenderObject,
    RenderOrchestrator, RenderpassPlan, Scene, Viewport,
};
use rstest::rstest;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn make_orchestrator(registry: &MeshRegistry, config: PostProcessConfig) -> RenderOrchestrator {
    RenderOrchestrator::new(RenderpassPlan::deferred().unwrap(), registry, config).unwrap()
}

fn render_one_frame(config: PostProcessConfig, scene: &Scene) -> DummyRecorder {
    let registry = MeshRegistry::new();
    let mut orchestrator = make_orchestrator(&registry, config);
    let mut recorder = DummyRecorder::new();
    let frame = FrameContext::new(scene, Viewport::from_dimensions(1280, 720));
    orchestrator.render(&mut recorder, &frame);
    recorder
}

#[test]
fn frame_executes_stages_in_pipeline_order() {
    init_logging();
    let recorder = render_one_frame(PostProcessConfig::default(), &Scene::new());

    assert_eq!(
        recorder.markers(),
        vec![
            "shadows", "skybox", "terrain", "water", "entities", "deferred", "fxaa", "lensflare",
            "gui", "fonts",
        ]
    );
}

#[test]
fn frame_has_renderpass_envelope_and_three_advances() {
    init_logging();
    let recorder = render_one_frame(PostProcessConfig::default(), &Scene::new());
    let commands = recorder.commands();

    assert_eq!(
        commands.first(),
        Some(&RecordedCommand::BeginRenderPass { subpass_count: 4 })
    );
    assert_eq!(commands.last(), Some(&RecordedCommand::EndRenderPass));

    let advances = commands
        .iter()
        .filter(|c| matches!(c, RecordedCommand::NextSubpass))
        .count();
    assert_eq!(advances, 3);
    assert_eq!(recorder.subpass_index(), 3);
}

#[test]
fn stages_record_into_their_declared_subpasses() {
    init_logging();
    let recorder = render_one_frame(
        PostProcessConfig {
            tiltshift: true,
            grain: true,
        },
        &Scene::new(),
    );

    // Walk the journal and note which subpass each stage marker lands in.
    let mut subpass = 0u32;
    let mut stage_subpasses = Vec::new();
    for command in recorder.commands() {
        match command {
            RecordedCommand::NextSubpass => subpass += 1,
            RecordedCommand::DebugMarker(label) => {
                stage_subpasses.push((label.clone(), subpass));
            }
            _ => {}
        }
    }

    let expected = [
        ("shadows", 0),
        ("skybox", 1),
        ("terrain", 1),
        ("water", 1),
        ("entities", 1),
        ("deferred", 2),
        ("fxaa", 3),
        ("lensflare", 3),
        ("tiltshift", 3),
        ("grain", 3),
        ("gui", 3),
        ("fonts", 3),
    ];
    let expected: Vec<(String, u32)> = expected
        .iter()
        .map(|(name, subpass)| (name.to_string(), *subpass))
        .collect();
    assert_eq!(stage_subpasses, expected);
}

#[rstest]
#[case(false, false, vec![])]
#[case(true, false, vec!["tiltshift"])]
#[case(false, true, vec!["grain"])]
#[case(true, true, vec!["tiltshift", "grain"])]
fn optional_filters_follow_configuration(
    #[case] tiltshift: bool,
    #[case] grain: bool,
    #[case] expected_optional: Vec<&str>,
) {
    init_logging();
    let recorder = render_one_frame(PostProcessConfig { tiltshift, grain }, &Scene::new());
    let markers = recorder.markers();

    // The optional filters sit between lensflare and gui; everything else
    // is always present.
    let lensflare = markers.iter().position(|m| *m == "lensflare").unwrap();
    let gui = markers.iter().position(|m| *m == "gui").unwrap();
    assert_eq!(&markers[lensflare + 1..gui], expected_optional.as_slice());
}

#[test]
fn toggling_filters_back_on_needs_no_rebuild() {
    init_logging();
    let registry = MeshRegistry::new();
    let mut orchestrator = make_orchestrator(&registry, PostProcessConfig::default());
    let scene = Scene::new();
    let frame = FrameContext::new(&scene, Viewport::from_dimensions(1280, 720));

    let mut recorder = DummyRecorder::new();
    orchestrator.render(&mut recorder, &frame);
    assert!(!recorder.markers().contains(&"grain"));

    orchestrator.set_config(PostProcessConfig {
        tiltshift: true,
        grain: true,
    });
    recorder.clear();
    orchestrator.render(&mut recorder, &frame);
    assert!(recorder.markers().contains(&"tiltshift"));
    assert!(recorder.markers().contains(&"grain"));
}

#[rstest]
#[case(FrameError::SurfaceOutdated)]
#[case(FrameError::SurfaceLost)]
fn failed_frame_start_skips_the_frame_cleanly(#[case] error: FrameError) {
    init_logging();
    let registry = MeshRegistry::new();
    let mut orchestrator = make_orchestrator(&registry, PostProcessConfig::default());
    let scene = Scene::new();
    let frame = FrameContext::new(&scene, Viewport::from_dimensions(1280, 720));

    let mut recorder = DummyRecorder::new();
    recorder.fail_next_begin(error);
    orchestrator.render(&mut recorder, &frame);

    // Nothing recorded, no subpass advanced, no frame counted.
    assert!(recorder.commands().is_empty());
    assert_eq!(recorder.subpass_index(), 0);
    assert_eq!(orchestrator.frame_count(), 0);

    // The next frame proceeds normally.
    orchestrator.render(&mut recorder, &frame);
    assert_eq!(orchestrator.frame_count(), 1);
    assert!(!recorder.commands().is_empty());
}

#[test]
fn scene_objects_are_drawn_in_shadow_and_entity_stages() {
    init_logging();
    let registry = MeshRegistry::new();
    let mut orchestrator = make_orchestrator(&registry, PostProcessConfig::default());

    let mesh = CylinderParams::new(1.0, 1.0, 2.0, 8, 2).create(&registry);
    let index_count = mesh.index_count();
    let mut scene = Scene::new();
    scene.add_object(RenderObject::new(mesh));

    let frame = FrameContext::new(&scene, Viewport::from_dimensions(1280, 720));
    let mut recorder = DummyRecorder::new();
    orchestrator.render(&mut recorder, &frame);

    let entity_draws = recorder
        .commands()
        .iter()
        .filter(|c| matches!(c, RecordedCommand::DrawIndexed { index_count: n } if *n == index_count))
        .count();
    // Once into the shadow map, once into the G-buffer.
    assert_eq!(entity_draws, 2);
}

#[test]
fn degenerate_meshes_render_as_nothing() {
    init_logging();
    let registry = MeshRegistry::new();
    let mut orchestrator = make_orchestrator(&registry, PostProcessConfig::default());

    // A zero-radius cylinder is a valid, empty mesh; the frame must treat
    // it as "nothing to draw", not an error.
    let empty = CylinderParams::new(0.0, 0.0, 2.0, 8, 2).create(&registry);
    assert!(empty.is_empty());
    let mut scene = Scene::new();
    scene.add_object(RenderObject::new(empty));

    let frame = FrameContext::new(&scene, Viewport::from_dimensions(1280, 720));
    let mut recorder = DummyRecorder::new();
    orchestrator.render(&mut recorder, &frame);

    let zero_draws = recorder
        .commands()
        .iter()
        .any(|c| matches!(c, RecordedCommand::DrawIndexed { index_count: 0 }));
    assert!(!zero_draws);
    assert_eq!(orchestrator.frame_count(), 1);
}
