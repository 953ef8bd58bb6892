mod common;

use common::{open_registry, setup_registry, student, submit_student};
use student_registry::{
    core::{SortField, SubmitOutcome},
    domain::{Field, Hobby, Student},
    storage::{JsonStorage, StudentRepository},
};

#[test]
fn add_edit_delete_walkthrough() {
    let (mut registry, dir) = setup_registry();
    let r1 = student("1", "Ann", "a@x.com", Hobby::Read);
    let r2 = student("2", "Bob", "bob@x.com", Hobby::Yoga);

    submit_student(&mut registry, &r1);
    assert_eq!(registry.students(), &[r1.clone()]);

    submit_student(&mut registry, &r2);
    assert_eq!(registry.students(), &[r1.clone(), r2.clone()]);

    registry.begin_edit(0).unwrap();
    registry.set_field(Field::Name, "Anna").unwrap();
    assert_eq!(
        registry.submit().unwrap(),
        SubmitOutcome::Updated { position: 0 }
    );
    let anna = Student {
        name: "Anna".into(),
        ..r1.clone()
    };
    assert_eq!(registry.students(), &[anna.clone(), r2]);

    registry.delete_at(1).unwrap();
    assert_eq!(registry.students(), &[anna.clone()]);

    let reopened = open_registry(dir.path());
    assert_eq!(reopened.students(), &[anna]);
}

#[test]
fn every_mutation_round_trips_through_storage() {
    let (mut registry, dir) = setup_registry();
    let storage = JsonStorage::new(Some(dir.path().to_path_buf()), None).unwrap();

    for (idx, name) in ["Bob", "ann", "Cid", "Dee"].iter().enumerate() {
        submit_student(
            &mut registry,
            &student(&idx.to_string(), name, "x@y.zz", Hobby::Dance),
        );
        assert_eq!(storage.load().unwrap(), registry.students());
    }

    registry.sort_by(SortField::Name).unwrap();
    assert_eq!(storage.load().unwrap(), registry.students());

    registry.delete_at(2).unwrap();
    assert_eq!(storage.load().unwrap(), registry.students());

    registry.begin_edit(0).unwrap();
    registry.toggle_hobby(Hobby::Write, true);
    registry.submit().unwrap();
    assert_eq!(storage.load().unwrap(), registry.students());
    assert_eq!(open_registry(dir.path()).students(), registry.students());
}

#[test]
fn rejected_submissions_leave_collection_untouched() {
    let (mut registry, dir) = setup_registry();
    submit_student(&mut registry, &student("1", "Ann", "a@x.com", Hobby::Read));
    let before = registry.students().to_vec();

    let cases: [(&str, &str, &str, Option<Hobby>, Field); 4] = [
        ("", "Bob", "b@x.com", Some(Hobby::Read), Field::Id),
        ("2", "", "b@x.com", Some(Hobby::Read), Field::Name),
        ("2", "Bob", "b@x", Some(Hobby::Read), Field::Email),
        ("2", "Bob", "b@x.com", None, Field::Hobby),
    ];
    for (id, name, email, hobby, failing) in cases {
        registry.reset_form();
        registry.set_field(Field::Id, id).unwrap();
        registry.set_field(Field::Name, name).unwrap();
        registry.set_field(Field::Email, email).unwrap();
        if let Some(hobby) = hobby {
            registry.toggle_hobby(hobby, true);
        }
        match registry.submit().unwrap() {
            SubmitOutcome::Rejected(errors) => {
                assert_eq!(errors.len(), 1, "{failing:?}");
                assert!(errors.contains(failing));
            }
            other => panic!("expected rejection for {failing:?}, got {other:?}"),
        }
        assert_eq!(registry.students(), before.as_slice());
    }
    assert_eq!(open_registry(dir.path()).students(), before.as_slice());
}

#[test]
fn pagination_and_search_over_seven_students() {
    let (mut registry, _dir) = setup_registry();
    for (idx, name) in ["Ann", "Bob", "Cid", "Dan", "Eve", "Fay", "Gus"]
        .iter()
        .enumerate()
    {
        submit_student(
            &mut registry,
            &student(&idx.to_string(), name, "mail@x.io", Hobby::Read),
        );
    }

    assert_eq!(registry.total_pages(), 3);
    let first = registry.controls();
    assert!(!first.show_prev && first.show_next);

    registry.set_search("an");
    let names: Vec<&str> = registry
        .visible_rows()
        .iter()
        .map(|row| row.student.name.as_str())
        .collect();
    assert_eq!(names, vec!["Ann"]);

    registry.set_search("");
    registry.go_to_page(3).unwrap();
    let rows = registry.visible_rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].student.name, "Gus");
    assert_eq!(rows[0].position, 6);
    let last = registry.controls();
    assert!(last.show_prev && !last.show_next);
}

#[test]
fn externally_edited_records_without_hobby_render() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("studentlist.json"),
        r#"[{"id":"9","name":"Zed","email":"z@z.io","hobby":[]},{"id":"8","name":"Yan","email":"y@y.io"},{"id":"7","name":"Xi","email":"x@x.io","hobby":null}]"#,
    )
    .unwrap();
    let registry = open_registry(dir.path());
    let hobbies: Vec<String> = registry
        .students()
        .iter()
        .map(|s| s.hobby.to_string())
        .collect();
    assert_eq!(hobbies, vec!["No Hobby", "No Hobby", "No Hobby"]);
}

#[test]
fn corrupted_storage_fails_to_open() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("studentlist.json"), "not json").unwrap();
    let storage = JsonStorage::new(Some(dir.path().to_path_buf()), None).unwrap();
    assert!(student_registry::core::RegistrationForm::new(Box::new(storage), 3).is_err());
}
