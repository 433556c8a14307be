use super::*;

#[test]
fn index_routes_are_gets() {
    assert_eq!(ApiRoute::Index(Resource::Lists).path(), "/lists");
    assert_eq!(ApiRoute::Index(Resource::Tasks).method(), Method::Get);
    assert_eq!(ApiRoute::Dashboard.path(), "/dashboard");
    assert_eq!(ApiRoute::Dashboard.name(), "dashboard");
}

#[test]
fn list_store_posts() {
    let route = ApiRoute::Store(Resource::Lists);
    assert_eq!(route.name(), "lists.store");
    assert_eq!(route.method(), Method::Post);
    assert_eq!(route.path(), "/lists");
}

#[test]
fn update_puts_to_member() {
    let route = ApiRoute::Update(Resource::Tasks, 42);
    assert_eq!(route.name(), "tasks.update");
    assert_eq!(route.method(), Method::Put);
    assert_eq!(route.path(), "/tasks/42");
}

#[test]
fn task_destroy_targets_tasks() {
    let route = ApiRoute::Destroy(Resource::Tasks, 9);
    assert_eq!(route.name(), "tasks.destroy");
    assert_eq!(route.method(), Method::Delete);
    assert_eq!(route.path(), "/tasks/9");
}

#[test]
fn method_displays_uppercase() {
    assert_eq!(Method::Delete.to_string(), "DELETE");
    assert_eq!(Method::Get.to_string(), "GET");
}
