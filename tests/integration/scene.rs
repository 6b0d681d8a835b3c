//! Scene document integration tests
//!
//! A parsed document becomes live program state: subtrees are handed out
//! by copy, mutations flow back through the shared storage, and native
//! objects ride along as handles.

use lxson_text::{format_tabbed, parse, to_lxson};
use lxson_value::{Kind, Value};

const SCENE: &str = "
    {
        title : 'Spinning Cube',
        camera : {
            position : [0.0, 2.5, -10.0],
            fov : 60.0,
        },
        materials : [
            phong { shininess : 32 },
            flat { },
        ],
    }
";

// =============================================================================
// Live Document State
// =============================================================================

#[test]
fn subtree_copies_write_back() {
    let scene = parse(SCENE).unwrap();

    let mut camera = scene.find("camera").unwrap();
    camera.insert("fov", 90.0).unwrap();

    // The copy aliased the document's storage, so the document sees it.
    assert_eq!(scene.find("camera").unwrap().find("fov").unwrap(), 90.0);
}

#[test]
fn detached_subtrees_do_not_write_back() {
    let scene = parse(SCENE).unwrap();

    let mut camera = scene.find("camera").unwrap().deep_clone();
    camera.insert("fov", 90.0).unwrap();

    assert_eq!(scene.find("camera").unwrap().find("fov").unwrap(), 60.0);
}

#[test]
fn material_entries_decompose() {
    let scene = parse(SCENE).unwrap();
    let materials = scene.find("materials").unwrap();
    assert_eq!(materials.size().unwrap(), 2);

    let first = materials.at(0).unwrap();
    assert_eq!(first.at(0).unwrap(), "phong");
    assert_eq!(first.at(1).unwrap().find("shininess").unwrap(), 32);

    let second = materials.at(1).unwrap();
    assert_eq!(second.at(0).unwrap(), "flat");
    assert_eq!(second.at(1).unwrap().size().unwrap(), 0);
}

#[test]
fn typed_extraction_of_vectors() {
    let scene = parse(SCENE).unwrap();
    let position: [f64; 3] = scene
        .find("camera")
        .unwrap()
        .find("position")
        .unwrap()
        .convert()
        .unwrap();
    assert_eq!(position, [0.0, 2.5, -10.0]);
}

// =============================================================================
// Native Objects
// =============================================================================

struct RenderTarget {
    width: u32,
    height: u32,
}

#[test]
fn handles_travel_with_the_tree() {
    let mut scene = parse(SCENE).unwrap();
    scene
        .insert(
            "target",
            Value::handle("RenderTarget", RenderTarget { width: 640, height: 480 }),
        )
        .unwrap();

    let target = scene.find("target").unwrap();
    assert_eq!(target.kind(), Kind::Handle);
    assert_eq!(target.handle_type().unwrap(), "RenderTarget");

    let native = target.downcast_handle::<RenderTarget>().unwrap();
    assert_eq!(native.width, 640);
    assert_eq!(native.height, 480);

    // Handles have no text form; rendering the tree now fails.
    assert!(to_lxson(&scene).is_err());
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn scene_renders_canonically() {
    let scene = parse(SCENE).unwrap();
    assert_eq!(
        to_lxson(&scene).unwrap(),
        "{camera:{fov:60.0,position:[0.0,2.5,-10.0]},\
         materials:[[\"phong\",{shininess:32}],[\"flat\",{}]],\
         title:\"Spinning Cube\"}"
    );
}

#[test]
fn scene_dumps_for_diagnostics() {
    let scene = parse("{title: 'demo', camera: {fov: 60.0, near: 1}}").unwrap();
    assert_eq!(
        format_tabbed(&scene),
        "camera : \n    fov : 60.000000\n    near : 1\ntitle : demo\n"
    );
}
