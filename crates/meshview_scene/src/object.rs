use meshview_transform::Transform;

use crate::SharedMaterial;

/// A renderable mesh attached to a [`SceneObject`].
#[derive(Debug, Clone)]
pub struct MeshNode {
    /// Name of the mesh in the source model, if it had one.
    pub name: Option<String>,
    /// Number of triangles in the mesh.
    pub triangle_count: usize,
    /// Materials used by the mesh, one per material group.
    pub materials: Vec<SharedMaterial>,
}

impl MeshNode {
    /// Creates a mesh that uses a single material.
    pub fn new(triangle_count: usize, material: SharedMaterial) -> Self {
        Self {
            name: None,
            triangle_count,
            materials: vec![material],
        }
    }

    /// Returns this mesh with a name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// A node in the renderable scene graph handed to the viewer.
///
/// The root of a converted model is where the up-axis correction is applied.
#[derive(Debug, Clone, Default)]
pub struct SceneObject {
    /// Name of the node.
    pub name: Option<String>,
    /// Placement relative to the parent node.
    pub transform: Transform,
    /// Meshes rendered at this node.
    pub meshes: Vec<MeshNode>,
    /// Child nodes.
    pub children: Vec<SceneObject>,
}

impl SceneObject {
    /// Creates an empty node with an identity transform.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns this node with a name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns this node with a transform.
    #[must_use]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Returns this node with an additional child.
    #[must_use]
    pub fn with_child(mut self, child: SceneObject) -> Self {
        self.children.push(child);
        self
    }

    /// Adds a child node.
    pub fn add_child(&mut self, child: SceneObject) {
        self.children.push(child);
    }

    /// Adds a mesh to this node.
    pub fn add_mesh(&mut self, mesh: MeshNode) {
        self.meshes.push(mesh);
    }

    /// Iterates over this node and all of its descendants, depth first.
    pub fn descendants(&self) -> impl Iterator<Item = &SceneObject> {
        let mut stack = vec![self];
        core::iter::from_fn(move || {
            let next = stack.pop()?;
            stack.extend(next.children.iter().rev());
            Some(next)
        })
    }

    /// Counts the meshes in this node and all of its descendants.
    pub fn mesh_count(&self) -> usize {
        self.descendants().map(|object| object.meshes.len()).sum()
    }
}
