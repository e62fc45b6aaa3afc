//! The read-only fact interfaces the code generator consumes.
//!
//! Both traits are implemented by the front-end. `Universe` is an in-memory
//! implementation used by tests and by small drivers.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::object::{Constant, ExprId, NodeId, ObjId, ObjKind, Object};
use crate::types::{BasicKind, InterfaceType, Method, Signature, StructType, Type};

/// Type checker facts for one compilation unit.
pub trait TypeOracle {
    /// Import path of the unit being compiled.
    fn package_path(&self) -> &str;

    fn object(&self, id: ObjId) -> &Object;

    /// Underlying type of a declared type.
    fn named_underlying(&self, id: ObjId) -> &Type;

    fn expr_type(&self, expr: ExprId) -> &Type;

    fn constant(&self, expr: ExprId) -> Option<&Constant>;

    /// Whether translating `expr` may suspend the running goroutine or
    /// otherwise produce an effect observable by sibling expressions.
    fn is_blocking(&self, expr: ExprId) -> bool;

    /// The opaque foreign-object type name, if the interop package is loaded.
    fn interop_object(&self) -> Option<ObjId> {
        None
    }

    /// Strip declared names until a structural type is reached.
    fn underlying<'a>(&'a self, ty: &'a Type) -> &'a Type {
        let mut ty = ty;
        while let Type::Named(id) = ty {
            ty = self.named_underlying(*id);
        }
        ty
    }

    /// Pointer to the opaque interop object type.
    fn is_interop_object(&self, ty: &Type) -> bool {
        let Type::Pointer(elem) = ty else {
            return false;
        };
        matches!((elem.as_ref(), self.interop_object()), (Type::Named(id), Some(obj)) if *id == obj)
    }

    /// The predeclared `error` interface.
    fn is_error_type(&self, id: ObjId) -> bool {
        let obj = self.object(id);
        obj.kind == ObjKind::TypeName && obj.is_predeclared() && obj.name == "error"
    }
}

/// Capture analysis facts.
pub trait EscapeOracle {
    /// Variables declared in `node` that are captured by reference below it.
    ///
    /// Order is unspecified.
    fn escaping_objects(&self, node: NodeId) -> Vec<ObjId>;
}

#[derive(Clone, Debug)]
struct ExprFacts {
    ty: Type,
    constant: Option<Constant>,
    blocking: bool,
}

/// In-memory oracle assembled by hand.
#[derive(Clone, Debug)]
pub struct Universe {
    package: String,
    objects: Vec<Object>,
    underlying: HashMap<ObjId, Type>,
    exprs: Vec<ExprFacts>,
    escapes: IndexMap<NodeId, Vec<ObjId>>,
    interop_object: Option<ObjId>,
    error: ObjId,
}

impl Universe {
    /// A universe with the predeclared `error` type already declared.
    pub fn new(package: impl Into<String>) -> Self {
        let mut universe = Self {
            package: package.into(),
            objects: Vec::new(),
            underlying: HashMap::new(),
            exprs: Vec::new(),
            escapes: IndexMap::new(),
            interop_object: None,
            error: ObjId::from_raw(0),
        };
        let error_iface = Type::Interface(InterfaceType {
            pkg: String::new(),
            methods: vec![Method {
                name: "Error".to_string(),
                sig: Signature::new(vec![], vec![Type::Basic(BasicKind::String)]),
            }],
        });
        let error = Object::new("error", ObjKind::TypeName, "");
        universe.error = universe.declare_type(error, error_iface);
        universe
    }

    pub fn error_type(&self) -> Type {
        Type::Named(self.error)
    }

    pub fn declare(&mut self, object: Object) -> ObjId {
        let id = ObjId::from_raw(self.objects.len() as u32);
        self.objects.push(object);
        id
    }

    /// Declare a type name together with its underlying type.
    pub fn declare_type(&mut self, object: Object, underlying: Type) -> ObjId {
        let id = self.declare(object);
        self.underlying.insert(id, underlying);
        id
    }

    /// Declare the opaque interop object type (`js.Object`).
    pub fn declare_interop_object(&mut self, pkg: impl Into<String>) -> ObjId {
        let obj = Object::new("Object", ObjKind::TypeName, pkg).package_level();
        let id = self.declare_type(obj, Type::Struct(StructType::default()));
        self.interop_object = Some(id);
        id
    }

    pub fn expr(&mut self, ty: Type) -> ExprId {
        let id = ExprId::from_raw(self.exprs.len() as u32);
        self.exprs.push(ExprFacts {
            ty,
            constant: None,
            blocking: false,
        });
        id
    }

    pub fn constant_expr(&mut self, ty: Type, value: Constant) -> ExprId {
        let id = self.expr(ty);
        self.exprs[id.index()].constant = Some(value);
        id
    }

    pub fn blocking_expr(&mut self, ty: Type) -> ExprId {
        let id = self.expr(ty);
        self.exprs[id.index()].blocking = true;
        id
    }

    pub fn set_escaping(&mut self, node: NodeId, objects: Vec<ObjId>) {
        self.escapes.insert(node, objects);
    }
}

impl TypeOracle for Universe {
    fn package_path(&self) -> &str {
        &self.package
    }

    fn object(&self, id: ObjId) -> &Object {
        &self.objects[id.index()]
    }

    fn named_underlying(&self, id: ObjId) -> &Type {
        self.underlying
            .get(&id)
            .unwrap_or_else(|| panic!("object {:?} is not a type name", self.object(id).name))
    }

    fn expr_type(&self, expr: ExprId) -> &Type {
        &self.exprs[expr.index()].ty
    }

    fn constant(&self, expr: ExprId) -> Option<&Constant> {
        self.exprs[expr.index()].constant.as_ref()
    }

    fn is_blocking(&self, expr: ExprId) -> bool {
        self.exprs[expr.index()].blocking
    }

    fn interop_object(&self) -> Option<ObjId> {
        self.interop_object
    }
}

impl EscapeOracle for Universe {
    fn escaping_objects(&self, node: NodeId) -> Vec<ObjId> {
        self.escapes.get(&node).cloned().unwrap_or_default()
    }
}
