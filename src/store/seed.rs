//! Built-in seed data.
//!
//! This is the document written on first run, before any page has touched
//! the store. Ids are fixed strings; signup-allocated ids are millisecond
//! timestamps and will never land in this range.

use super::document::Document;
use super::models::{
    Analytics, Assignment, Customer, CustomerStats, Event, FoodItem, MonthlyStat, Shift,
    StaffMember, User,
};

/// Build the default document.
pub fn seed_document() -> Document {
    Document {
        users: vec![
            User {
                id: "1".into(),
                email: "afrin@example.com".into(),
                password: "password".into(),
                role: "customer".into(),
                name: "Afrin Shaik".into(),
                phone: Some("+91-9876543210".into()),
                address: Some("123 Banjara Hills, Hyderabad".into()),
                department: None,
                status: None,
            },
            User {
                id: "2".into(),
                email: "admin@test.com".into(),
                password: "password".into(),
                role: "admin".into(),
                name: "Admin User".into(),
                phone: Some("+91-9876543211".into()),
                address: None,
                department: None,
                status: None,
            },
            User {
                id: "3".into(),
                email: "maya@example.com".into(),
                password: "password".into(),
                role: "manager".into(),
                name: "Maya Rao".into(),
                phone: Some("+91-9876543212".into()),
                address: None,
                department: Some("Event Decor".into()),
                status: Some("inactive".into()),
            },
            User {
                id: "4".into(),
                email: "john@example.com".into(),
                password: "password".into(),
                role: "manager".into(),
                name: "John Smith".into(),
                phone: Some("+91-9876543213".into()),
                address: None,
                department: Some("Food Oversight".into()),
                status: Some("active".into()),
            },
            User {
                id: "5".into(),
                email: "adil@example.com".into(),
                password: "password".into(),
                role: "manager".into(),
                name: "Adil Khan".into(),
                phone: Some("+91-9876543214".into()),
                address: None,
                department: Some("Coordination".into()),
                status: Some("pending".into()),
            },
        ],
        events: vec![
            Event {
                id: "1".into(),
                customer_id: "1".into(),
                title: "Eco-Friendly Wedding".into(),
                date: "2025-12-05".into(),
                venue: "Hyderabad Eco Garden".into(),
                guests: 150,
                status: "planned".into(),
                description: Some(
                    "A sustainable wedding celebration with zero waste practices".into(),
                ),
                budget: Some("$25,000".into()),
            },
            Event {
                id: "2".into(),
                customer_id: "6".into(),
                title: "Green Wedding 2025".into(),
                date: "2025-12-15".into(),
                venue: "BioPark Hall".into(),
                guests: 200,
                status: "planned".into(),
                description: Some("Traditional setup with eco-friendly elements".into()),
                budget: None,
            },
            Event {
                id: "3".into(),
                customer_id: "7".into(),
                title: "Arjun & Priya Wedding".into(),
                date: "2025-11-20".into(),
                venue: "Nature Resort".into(),
                guests: 150,
                status: "confirmed".into(),
                description: Some("Vegan menu with organic decorations".into()),
                budget: None,
            },
            Event {
                id: "4".into(),
                customer_id: "8".into(),
                title: "Sameer & Ayesha Wedding".into(),
                date: "2025-10-25".into(),
                venue: "Heritage Palace".into(),
                guests: 80,
                status: "confirmed".into(),
                description: Some("Traditional setup with sustainable practices".into()),
                budget: None,
            },
        ],
        assignments: vec![
            Assignment {
                id: "1".into(),
                manager_id: "3".into(),
                event_id: "1".into(),
                task: "Decor Setup".into(),
                priority: "high".into(),
                due_date: "2025-12-01".into(),
                status: "pending".into(),
                created_at: "2024-11-15T10:00:00Z".into(),
            },
            Assignment {
                id: "2".into(),
                manager_id: "4".into(),
                event_id: "1".into(),
                task: "Food Oversight".into(),
                priority: "high".into(),
                due_date: "2025-12-04".into(),
                status: "in-progress".into(),
                created_at: "2024-11-15T11:00:00Z".into(),
            },
            Assignment {
                id: "3".into(),
                manager_id: "5".into(),
                event_id: "2".into(),
                task: "Venue Coordination".into(),
                priority: "medium".into(),
                due_date: "2025-12-10".into(),
                status: "pending".into(),
                created_at: "2024-11-16T09:00:00Z".into(),
            },
        ],
        shifts: vec![
            Shift {
                id: "1".into(),
                manager_id: "4".into(),
                date: "2024-11-20".into(),
                start_time: "08:00".into(),
                end_time: "12:00".into(),
                status: "scheduled".into(),
                description: Some("Morning setup shift".into()),
            },
            Shift {
                id: "2".into(),
                manager_id: "5".into(),
                date: "2024-11-20".into(),
                start_time: "13:00".into(),
                end_time: "17:00".into(),
                status: "scheduled".into(),
                description: Some("Afternoon coordination shift".into()),
            },
            Shift {
                id: "3".into(),
                manager_id: "3".into(),
                date: "2024-11-21".into(),
                start_time: "09:00".into(),
                end_time: "13:00".into(),
                status: "scheduled".into(),
                description: Some("Decoration preparation".into()),
            },
            Shift {
                id: "4".into(),
                manager_id: "4".into(),
                date: "2024-11-21".into(),
                start_time: "14:00".into(),
                end_time: "18:00".into(),
                status: "completed".into(),
                description: Some("Food preparation oversight".into()),
            },
        ],
        staff: vec![
            staff("1", "Rahul Kumar", "Decorator", "assigned", "Decoration", Some("Event 1")),
            staff("2", "Priya Sharma", "Chef", "assigned", "Catering", Some("Event 1")),
            staff("3", "Arjun Reddy", "Coordinator", "available", "Coordination", None),
            staff("4", "Sneha Patel", "Server", "assigned", "Service", Some("Event 2")),
            staff("5", "Kiran Singh", "Security", "available", "Security", None),
            staff("6", "Deepa Nair", "Florist", "assigned", "Decoration", Some("Event 1")),
            staff("7", "Vikram Joshi", "Photographer", "assigned", "Media", Some("Event 2")),
            staff("8", "Meera Das", "Cleaner", "assigned", "Maintenance", Some("Event 1")),
            staff("9", "Suresh Kumar", "Driver", "assigned", "Transport", Some("Event 2")),
            staff("10", "Kavita Rao", "Assistant", "assigned", "General", Some("Event 1")),
            staff("11", "Ravi Gupta", "Technician", "assigned", "Technical", Some("Event 2")),
            staff("12", "Anita Verma", "Manager Assistant", "available", "Administration", None),
        ],
        customers: vec![
            Customer {
                id: "6".into(),
                name: "Green Wedding Couple".into(),
                email: "green@example.com".into(),
                phone: "+91-9876543215".into(),
                event_type: "Traditional".into(),
                guests: 200,
                status: "confirmed".into(),
                special_requests: None,
            },
            Customer {
                id: "7".into(),
                name: "Arjun & Priya".into(),
                email: "arjun.priya@example.com".into(),
                phone: "+91-9876543216".into(),
                event_type: "Vegan".into(),
                guests: 150,
                status: "confirmed".into(),
                special_requests: Some("Vegan Menu, No plastic usage".into()),
            },
            Customer {
                id: "8".into(),
                name: "Sameer & Ayesha".into(),
                email: "sameer.ayesha@example.com".into(),
                phone: "+91-9876543217".into(),
                event_type: "Traditional".into(),
                guests: 80,
                status: "confirmed".into(),
                special_requests: Some("Traditional setup with sustainable practices".into()),
            },
        ],
        food_items: vec![
            food(
                "1",
                "Paneer Butter Masala",
                "Vegetarian Main Course",
                "Made with organic paneer and locally sourced ingredients",
            ),
            food("2", "Jeera Rice", "Rice", "Organic basmati rice with cumin"),
            food(
                "3",
                "Grilled Chicken",
                "Non-Vegetarian Main Course",
                "Free-range chicken grilled with herbs",
            ),
            food(
                "4",
                "Banana Leaf Plates",
                "Sustainable Serving",
                "Eco-friendly serving plates made from banana leaves",
            ),
            food(
                "5",
                "Steel Water Bottles",
                "Beverages",
                "Reusable steel bottles to eliminate plastic waste",
            ),
        ],
        analytics: Analytics {
            customers: CustomerStats {
                booked: 35,
                confirmed: 25,
                canceled: 5,
                walkins: 5,
            },
            monthly_data: vec![
                month("Jan", 12, 45000),
                month("Feb", 18, 67000),
                month("Mar", 22, 82000),
                month("Apr", 15, 56000),
                month("May", 28, 98000),
                month("Jun", 32, 125000),
            ],
        },
    }
}

fn staff(
    id: &str,
    name: &str,
    role: &str,
    status: &str,
    department: &str,
    assigned_to: Option<&str>,
) -> StaffMember {
    StaffMember {
        id: id.into(),
        name: name.into(),
        role: role.into(),
        status: status.into(),
        department: department.into(),
        assigned_to: assigned_to.map(Into::into),
    }
}

fn food(id: &str, name: &str, category: &str, description: &str) -> FoodItem {
    FoodItem {
        id: id.into(),
        name: name.into(),
        category: category.into(),
        sustainable: true,
        description: Some(description.into()),
    }
}

fn month(month: &str, bookings: u32, revenue: u64) -> MonthlyStat {
    MonthlyStat {
        month: month.into(),
        bookings,
        revenue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_collection_sizes() {
        let doc = seed_document();
        assert_eq!(doc.users.len(), 5);
        assert_eq!(doc.events.len(), 4);
        assert_eq!(doc.assignments.len(), 3);
        assert_eq!(doc.shifts.len(), 4);
        assert_eq!(doc.staff.len(), 12);
        assert_eq!(doc.customers.len(), 3);
        assert_eq!(doc.food_items.len(), 5);
        assert_eq!(doc.analytics.monthly_data.len(), 6);
    }

    #[test]
    fn test_seed_roles_cover_all_three() {
        let doc = seed_document();
        for role in ["customer", "admin", "manager"] {
            assert!(doc.users.iter().any(|u| u.role == role), "missing {}", role);
        }
    }

    #[test]
    fn test_seed_has_a_dangling_customer_reference() {
        // Event 2 points at customer 6, who exists in `customers` but not in
        // `users`. Resolution must go through the customers collection.
        let doc = seed_document();
        let event = doc.events.iter().find(|e| e.id == "2").unwrap();
        assert_eq!(doc.customer_name(&event.customer_id), "Green Wedding Couple");
        assert_eq!(doc.user_name(&event.customer_id), "Unknown");
    }

    #[test]
    fn test_seed_round_trips_through_json() {
        let doc = seed_document();
        let json = serde_json::to_string(&doc).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }
}
