use std::borrow::Cow;
use std::collections::BTreeMap;

use gltf::binary::Glb;
use gltf_json::accessor::{ComponentType, GenericComponentType, Type as AccessorType};
use gltf_json::buffer::Target;
use gltf_json::mesh::{Mode, Primitive, Semantic};
use gltf_json::validation::{Checked, USize64};
use gltf_json::Index;

use crate::error::{LatheError, Result};
use crate::types::{Curve, Mesh};

const GENERATOR: &str = "lathe-sketch";

/// Serialize the lathe mesh and the sketched curves into a binary GLB.
///
/// Produces one glTF mesh holding:
/// - a TRIANGLES primitive with POSITION, NORMAL, TEXCOORD_0 and indices,
///   when `mesh` is non-empty
/// - one LINE_STRIP primitive per curve with at least two points
///
/// Indices use u16 when the vertex count fits, u32 otherwise. A scene with
/// nothing drawable yields a minimal valid GLB.
pub fn write_glb(mesh: &Mesh, curves: &[&Curve]) -> Result<Vec<u8>> {
    mesh.validate()?;

    let mut root = new_root();
    let mut bin_data: Vec<u8> = Vec::new();
    let buffer_idx = Index::new(0); // pushed at the end
    let mut primitives = Vec::new();

    if !mesh.is_empty() {
        primitives.push(surface_primitive(&mut root, &mut bin_data, buffer_idx, mesh));
    }

    for curve in curves.iter().filter(|c| c.len() >= 2) {
        primitives.push(line_strip_primitive(
            &mut root,
            &mut bin_data,
            buffer_idx,
            curve,
        ));
    }

    if primitives.is_empty() {
        return write_empty_glb();
    }

    let mesh_idx = root.push(gltf_json::Mesh {
        primitives,
        weights: None,
        name: Some("lathe".into()),
        extensions: Default::default(),
        extras: Default::default(),
    });

    let node_idx = root.push(gltf_json::Node {
        mesh: Some(mesh_idx),
        ..Default::default()
    });
    let scene_idx = root.push(gltf_json::Scene {
        nodes: vec![node_idx],
        name: None,
        extensions: Default::default(),
        extras: Default::default(),
    });
    root.scene = Some(scene_idx);

    pad_to_4(&mut bin_data, 0);
    root.push(gltf_json::Buffer {
        byte_length: USize64::from(bin_data.len()),
        uri: None,
        name: None,
        extensions: Default::default(),
        extras: Default::default(),
    });

    assemble(&root, Some(bin_data))
}

fn new_root() -> gltf_json::Root {
    gltf_json::Root {
        asset: gltf_json::Asset {
            version: "2.0".into(),
            generator: Some(GENERATOR.into()),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn surface_primitive(
    root: &mut gltf_json::Root,
    bin_data: &mut Vec<u8>,
    buffer_idx: Index<gltf_json::Buffer>,
    mesh: &Mesh,
) -> Primitive {
    let count = mesh.vertex_count();
    let mut attributes = BTreeMap::new();

    let (pos_min, pos_max) = compute_position_bounds(&mesh.positions);
    let view = push_view(
        root,
        bin_data,
        buffer_idx,
        mesh.position_bytes(),
        Target::ArrayBuffer,
    );
    let accessor = push_accessor(
        root,
        view,
        count,
        ComponentType::F32,
        AccessorType::Vec3,
        Some((pos_min, pos_max)),
    );
    attributes.insert(Checked::Valid(Semantic::Positions), accessor);

    let view = push_view(
        root,
        bin_data,
        buffer_idx,
        mesh.normal_bytes(),
        Target::ArrayBuffer,
    );
    let accessor = push_accessor(root, view, count, ComponentType::F32, AccessorType::Vec3, None);
    attributes.insert(Checked::Valid(Semantic::Normals), accessor);

    let view = push_view(
        root,
        bin_data,
        buffer_idx,
        mesh.uv_bytes(),
        Target::ArrayBuffer,
    );
    let accessor = push_accessor(root, view, count, ComponentType::F32, AccessorType::Vec2, None);
    attributes.insert(Checked::Valid(Semantic::TexCoords(0)), accessor);

    // u16 when vertex_count <= 65535, else u32
    let use_u16 = count <= 65535;
    let idx_view = if use_u16 {
        let idx_u16: Vec<u16> = mesh.indices.iter().map(|&i| i as u16).collect();
        push_view(
            root,
            bin_data,
            buffer_idx,
            bytemuck::cast_slice(&idx_u16),
            Target::ElementArrayBuffer,
        )
    } else {
        push_view(
            root,
            bin_data,
            buffer_idx,
            mesh.index_bytes(),
            Target::ElementArrayBuffer,
        )
    };
    let idx_component = if use_u16 {
        ComponentType::U16
    } else {
        ComponentType::U32
    };
    let idx_accessor = push_accessor(
        root,
        idx_view,
        mesh.index_count(),
        idx_component,
        AccessorType::Scalar,
        None,
    );

    Primitive {
        attributes,
        indices: Some(idx_accessor),
        material: None,
        mode: Checked::Valid(Mode::Triangles),
        targets: None,
        extensions: Default::default(),
        extras: Default::default(),
    }
}

fn line_strip_primitive(
    root: &mut gltf_json::Root,
    bin_data: &mut Vec<u8>,
    buffer_idx: Index<gltf_json::Buffer>,
    curve: &Curve,
) -> Primitive {
    let floats: &[f32] = bytemuck::cast_slice(curve.points());
    let bounds = compute_position_bounds(floats);
    let view = push_view(
        root,
        bin_data,
        buffer_idx,
        curve.vertex_bytes(),
        Target::ArrayBuffer,
    );
    let accessor = push_accessor(
        root,
        view,
        curve.len(),
        ComponentType::F32,
        AccessorType::Vec3,
        Some(bounds),
    );

    let mut attributes = BTreeMap::new();
    attributes.insert(Checked::Valid(Semantic::Positions), accessor);

    Primitive {
        attributes,
        indices: None,
        material: None,
        mode: Checked::Valid(Mode::LineStrip),
        targets: None,
        extensions: Default::default(),
        extras: Default::default(),
    }
}

/// Append `bytes` to the binary chunk (4-byte aligned) and register a view.
fn push_view(
    root: &mut gltf_json::Root,
    bin_data: &mut Vec<u8>,
    buffer_idx: Index<gltf_json::Buffer>,
    bytes: &[u8],
    target: Target,
) -> Index<gltf_json::buffer::View> {
    pad_to_4(bin_data, 0);
    let byte_offset = bin_data.len();
    bin_data.extend_from_slice(bytes);

    root.push(gltf_json::buffer::View {
        buffer: buffer_idx,
        byte_length: USize64::from(bytes.len()),
        byte_offset: Some(USize64::from(byte_offset)),
        byte_stride: None,
        name: None,
        target: Some(Checked::Valid(target)),
        extensions: Default::default(),
        extras: Default::default(),
    })
}

fn push_accessor(
    root: &mut gltf_json::Root,
    view: Index<gltf_json::buffer::View>,
    count: usize,
    component: ComponentType,
    type_: AccessorType,
    bounds: Option<([f32; 3], [f32; 3])>,
) -> Index<gltf_json::Accessor> {
    let (min, max) = match bounds {
        Some((min, max)) => (Some(serde_json::json!(min)), Some(serde_json::json!(max))),
        None => (None, None),
    };

    root.push(gltf_json::Accessor {
        buffer_view: Some(view),
        byte_offset: Some(USize64(0)),
        count: USize64::from(count),
        component_type: Checked::Valid(GenericComponentType(component)),
        type_: Checked::Valid(type_),
        min,
        max,
        name: None,
        normalized: false,
        sparse: None,
        extensions: Default::default(),
        extras: Default::default(),
    })
}

/// Produce a minimal valid empty GLB.
fn write_empty_glb() -> Result<Vec<u8>> {
    let mut root = new_root();

    let node_idx = root.push(gltf_json::Node::default());
    let scene_idx = root.push(gltf_json::Scene {
        nodes: vec![node_idx],
        name: None,
        extensions: Default::default(),
        extras: Default::default(),
    });
    root.scene = Some(scene_idx);

    assemble(&root, None)
}

/// Serialize the JSON chunk and wrap it with the optional binary chunk.
fn assemble(root: &gltf_json::Root, bin: Option<Vec<u8>>) -> Result<Vec<u8>> {
    let json_string = gltf_json::serialize::to_string(root)
        .map_err(|e| LatheError::Output(format!("glTF JSON serialization failed: {e}")))?;
    let mut json_bytes = json_string.into_bytes();
    // JSON chunk is padded with spaces
    pad_to_4(&mut json_bytes, b' ');

    let bin_len = bin.as_ref().map_or(0, |b| 8 + b.len());
    let glb = Glb {
        header: gltf::binary::Header {
            magic: *b"glTF",
            version: 2,
            length: (12 + 8 + json_bytes.len() + bin_len) as u32,
        },
        json: Cow::Owned(json_bytes),
        bin: bin.map(Cow::Owned),
    };

    glb.to_vec()
        .map_err(|e| LatheError::Output(format!("GLB serialization failed: {e}")))
}

fn pad_to_4(data: &mut Vec<u8>, fill: u8) {
    while data.len() % 4 != 0 {
        data.push(fill);
    }
}

/// Compute min/max for a flat positions array (stride 3).
fn compute_position_bounds(positions: &[f32]) -> ([f32; 3], [f32; 3]) {
    let mut min = [f32::INFINITY; 3];
    let mut max = [f32::NEG_INFINITY; 3];

    for chunk in positions.chunks_exact(3) {
        for i in 0..3 {
            min[i] = min[i].min(chunk[i]);
            max[i] = max[i].max(chunk[i]);
        }
    }

    (min, max)
}
