//! End-to-end tests running the pipeline over JSON documents.

use polygen_codegen::{
    InputType, Pipeline, Record, Severity,
    mappers::{GoMapper, ProtoMapper},
};
use polygen_ir::ApiDocument;

const PETSTORE: &str = r##"{
    "title": "Petstore",
    "version": "1.0.0",
    "schemas": {
        "Owner": {
            "type": "object",
            "properties": {
                "id": { "type": "integer", "readOnly": true },
                "email": { "type": "string", "format": "email" }
            },
            "required": ["id", "email"]
        },
        "Pet": {
            "type": "object",
            "isResponse": true,
            "properties": {
                "id": { "type": "integer", "format": "int64" },
                "name": { "type": "string", "minLength": 1 },
                "owner": { "$ref": "#/components/schemas/Owner" },
                "status": { "type": "string", "enum": ["available", "sold"] },
                "tags": { "type": "array", "items": { "type": "string" } },
                "bornAt": { "type": ["string", "null"], "format": "date-time" }
            },
            "required": ["id", "name"]
        },
        "PetPatch": {
            "type": "object",
            "isPatch": true,
            "properties": { "name": { "type": "string" } }
        }
    },
    "operations": [
        {
            "operationId": "getPet",
            "method": "get",
            "path": "/pets/{petId}",
            "parameters": [
                { "name": "petId", "in": "path", "schema": { "type": "integer" } }
            ]
        },
        {
            "operationId": "updatePet",
            "method": "put",
            "path": "/pets/{petId}",
            "parameters": [
                { "name": "petId", "in": "path", "schema": { "type": "integer" } },
                { "name": "X-Request-Id", "in": "header", "schema": { "type": "string" } }
            ],
            "requestBody": {
                "$ref": "#/components/schemas/Pet",
                "contentType": "application/json",
                "required": true
            }
        },
        {
            "operationId": "patchPet",
            "method": "patch",
            "path": "/pets/{petId}",
            "parameters": [
                { "name": "petId", "in": "path", "schema": { "type": "integer" } }
            ],
            "patchBody": { "model": "PetPatch", "required": true }
        },
        {
            "operationId": "listPets",
            "path": "/pets",
            "parameters": [
                { "name": "limit", "in": "query", "schema": { "type": "integer", "format": "int32" } },
                { "name": "species", "in": "query", "required": true, "schema": { "type": "string" } }
            ]
        }
    ]
}"##;

fn petstore() -> polygen_codegen::CompilationContext {
    let document = ApiDocument::from_json(PETSTORE).expect("fixture should parse");
    Pipeline::new().run(document).expect("pipeline should succeed")
}

#[test]
fn test_petstore_builds_without_diagnostics() {
    let ctx = petstore();

    assert!(ctx.diagnostics.is_empty(), "{:?}", ctx.diagnostics);
    let names: Vec<&str> = ctx.models.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["Owner", "Pet", "PetPatch"]);
    assert_eq!(ctx.operations.len(), 4);
}

#[test]
fn test_field_records_carry_every_language() {
    let ctx = petstore();
    let pet = ctx.model("Pet").unwrap();

    let owner = pet.field("owner").unwrap().to_record().unwrap();
    assert_eq!(owner["python_type"], "Optional[Owner]");
    assert_eq!(owner["typescript_type"], "Owner");
    assert_eq!(owner["zod_type"], "OwnerSchema.optional()");
    assert_eq!(owner["go_type"], "*Owner");
    assert_eq!(owner["is_ref"], true);

    let born_at = pet.field("bornAt").unwrap();
    assert!(born_at.nullable);
    assert!(born_at.optional);
    assert_eq!(born_at.types.typescript, "string | null");

    let name = pet.field("name").unwrap();
    assert!(name.has_validation);
    assert!(!name.optional);
}

#[test]
fn test_signatures() {
    let ctx = petstore();
    let update = &ctx.operation("updatePet").unwrap().params;

    insta::assert_snapshot!(
        update.for_python().signature,
        @"pet_id: int, data: Pet, *, x_request_id: Optional[str] = None"
    );
    insta::assert_snapshot!(
        update.for_typescript().signature,
        @"petId: number, data: Pet, xRequestId?: string"
    );
    insta::assert_snapshot!(
        update.for_go().signature,
        @"ctx context.Context, petId int64, body *Pet, params *UpdatePetParams"
    );

    let patch = &ctx.operation("patchPet").unwrap().params;
    insta::assert_snapshot!(
        patch.for_python().signature,
        @"pet_id: int, data: Optional[PetPatch] = None"
    );

    let list = &ctx.operation("listPets").unwrap().params;
    insta::assert_snapshot!(
        list.for_typescript().signature,
        @"species: string, limit?: number"
    );
}

#[test]
fn test_go_and_proto_output() {
    let ctx = petstore();
    let pet = ctx.model("Pet").unwrap();

    let go = GoMapper::new().map_schema(pet);
    assert_eq!(go.imports, ["\"time\""]);
    assert_eq!(go.fields[2].go_type, "*Owner");

    let proto = ProtoMapper::new().map_schema(pet);
    assert_eq!(proto.fields[4].declaration(), "repeated string tags = 5;");
    assert_eq!(proto.enums[0].name, "PetStatus");
}

#[test]
fn test_broken_reference_skips_one_schema() {
    let mut schemas = Vec::new();
    for i in 0..9 {
        schemas.push(format!(
            r#""Model{i}": {{ "type": "object", "properties": {{ "value": {{ "type": "string" }} }} }}"#
        ));
    }
    schemas.push(
        r##""Broken": { "type": "object", "properties": { "link": { "$ref": "#/components/schemas/Missing" } } }"##
            .to_string(),
    );
    let json = format!(r#"{{ "schemas": {{ {} }} }}"#, schemas.join(", "));

    let document = ApiDocument::from_json(&json).unwrap();
    let ctx = Pipeline::new().run(document).unwrap();

    assert_eq!(ctx.models.len(), 9);
    assert_eq!(ctx.error_count(), 1);
    let error = ctx.errors().next().unwrap();
    assert_eq!(error.severity, Severity::Error);
    assert_eq!(error.location.as_deref(), Some("schemas.Broken"));
    assert_eq!(
        error.message,
        "field `link` references undefined model `Missing`"
    );
}

const SHARED_ENUMS: &str = r##"{
    "schemas": {
        "StatusEnum": { "type": "string", "enum": ["available", "pending", "sold"] },
        "Slug": { "type": "string" },
        "Pet": {
            "type": "object",
            "properties": {
                "name": { "type": "string" },
                "status": { "$ref": "#/components/schemas/StatusEnum" },
                "history": { "type": "array", "items": { "$ref": "#/components/schemas/StatusEnum" } }
            },
            "required": ["name", "status"]
        },
        "Tag": {
            "type": "object",
            "properties": { "slug": { "$ref": "#/components/schemas/Slug" } }
        },
        "TagList": {
            "type": "object",
            "properties": { "tags": { "type": "array", "items": { "$ref": "#/components/schemas/Tag" } } }
        }
    },
    "operations": [
        {
            "operationId": "findPets",
            "path": "/pets",
            "parameters": [
                { "name": "status", "in": "query", "required": true, "schema": { "$ref": "#/components/schemas/StatusEnum" } }
            ]
        },
        {
            "operationId": "createTag",
            "method": "post",
            "path": "/tags",
            "requestBody": { "$ref": "#/components/schemas/Tag", "required": true }
        }
    ]
}"##;

#[test]
fn test_shared_enum_reference() {
    let document = ApiDocument::from_json(SHARED_ENUMS).unwrap();
    let ctx = Pipeline::new().run(document).unwrap();

    let status = ctx.enumeration("StatusEnum").unwrap();
    assert_eq!(status.variant_names, ["AVAILABLE", "PENDING", "SOLD"]);
    assert!(
        !ctx.diagnostics
            .iter()
            .any(|d| d.location.as_deref() == Some("schemas.StatusEnum")),
        "{:?}",
        ctx.diagnostics
    );

    let pet = ctx.model("Pet").unwrap();
    let field = pet.field("status").unwrap();
    assert!(field.is_enum);
    assert_eq!(field.input_type, InputType::Select);
    assert_eq!(field.enum_type.as_deref(), Some("StatusEnum"));
    assert_eq!(field.enum_names, ["AVAILABLE", "PENDING", "SOLD"]);
    assert_eq!(field.types.typescript, "StatusEnum");
    assert_eq!(pet.field("history").unwrap().types.typescript, "StatusEnum[]");
    assert_eq!(pet.enum_fields().count(), 0);

    let find = &ctx.operation("findPets").unwrap().params;
    assert_eq!(find.query_params[0].enum_values.len(), 3);
    insta::assert_snapshot!(find.for_python().signature, @"*, status: StatusEnum");

    let go = GoMapper::map_shared_enum(status);
    assert_eq!(go.name, "StatusEnum");
    let proto = ProtoMapper::map_shared_enum(status);
    assert_eq!(proto.values[0].name, "STATUS_ENUM_UNSPECIFIED");
}

#[test]
fn test_reference_to_skipped_schema_is_unresolved() {
    let document = ApiDocument::from_json(SHARED_ENUMS).unwrap();
    let ctx = Pipeline::new().run(document).unwrap();

    assert!(ctx.model("Tag").is_none());
    assert!(ctx.model("TagList").is_none());
    assert!(ctx.operation("createTag").is_none());

    let errors: Vec<(&str, &str)> = ctx
        .errors()
        .map(|d| (d.location.as_deref().unwrap_or_default(), d.message.as_str()))
        .collect();
    assert_eq!(
        errors,
        [
            ("schemas.Tag", "field `slug` references undefined model `Slug`"),
            ("schemas.TagList", "field `tags` references undefined model `Tag`"),
            (
                "operations.createTag",
                "operation `createTag` references undefined model `Tag`"
            ),
        ]
    );

    let slug = ctx
        .diagnostics
        .iter()
        .find(|d| d.location.as_deref() == Some("schemas.Slug"))
        .unwrap();
    assert_eq!(slug.severity, Severity::Info);
}

#[test]
fn test_build_is_deterministic() {
    let first = petstore();
    let second = petstore();

    let records = |ctx: &polygen_codegen::CompilationContext| -> Vec<serde_json::Value> {
        ctx.models
            .iter()
            .map(|m| m.to_record().unwrap())
            .chain(ctx.operations.iter().map(|o| o.to_record().unwrap()))
            .collect()
    };
    assert_eq!(records(&first), records(&second));
}
