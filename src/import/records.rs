/// Historical work log, Sept 2025 to Feb 2026, as (date, description).
pub const HISTORY: &[(&str, &str)] = &[
    ("2025-09-22", "setup : Cabocab project setup for diver app (partial setup)"),
    ("2025-09-23", "setup & task : cabocab driver app setup completed.. then analyze the code and did some UI tasks like profile and rating style and position changes"),
    ("2025-09-24", "task : analyze the code and add the download pdf button and their functionalities"),
    ("2025-10-06", "get the dispatcher gmail, password and website details.. and analyze the booking cancelled issue."),
    ("2025-10-07", "analyze the code and try to fix the booking cancelled issue (it occurs only one driver)"),
    ("2025-10-08", "get the user-new-main project and analyze the user project files"),
    ("2025-10-09", "fix : change the auto direction as per the driver facing direction"),
    ("2025-10-10", "fix : change the mobile number(ad) type from Long to String and db setup locally.. fix : when the user click the ad in the second time while the user didn't give the allow permission for the first time. it will display the custom UI to redirect the permission settings."),
    ("2025-10-11", "Saturday : holiday"),
    ("2025-10-12", "Sunday : holiday"),
    ("2025-10-13", "git : upload the updated code to the git.. then learn reactnative"),
    ("2025-10-14", "no tasks given : so learn the reactnative and express"),
    ("2025-10-15", "diwali holiday"),
    ("2025-10-27", "MediConnect : register page work"),
    ("2025-10-28", "test : coupan project testing with suman bro"),
    ("2025-10-29", "MediConnect : protected route and learn about jsonwebtoken"),
    ("2025-10-30", "leave : for internal exam and practical"),
    ("2025-11-06", "reactnative learning"),
    ("2025-11-07", "sem holidays"),
    ("2025-12-07", "leave"),
    ("2025-12-15", "task and setup : Reactnative task and koopanz customer app setup completed partially"),
    ("2025-12-16", "test : Koopanz customer and merchant application"),
    ("2025-12-17", "MediConnect : Mobile app creation for MediConnect using Antigravity(Agent). medicine , doctor, lab test, pharmacy, profile,history ..."),
    ("2025-12-18", "Mediconnect : AI Chatbot(Gemini API) and notification(firebase). some extra features creation and bug fixing."),
    ("2025-12-19", "plan to build the rest mobile app , develop backend APIs and their functionalities of police login"),
    ("2025-12-20", "Saturday leave : In hostel, working on backend APIs"),
    ("2025-12-21", "Sunday leave : In hostel , working on backend APIs for admin login"),
    ("2025-12-22", "develop : backend APIs"),
    ("2025-12-23", "backend APIs"),
    ("2025-12-24", "backend APIs"),
    ("2025-12-25", "christmas leave"),
    ("2025-12-26", "leave"),
    ("2025-12-27", "saturday"),
    ("2025-12-28", "sunday"),
    ("2025-12-29", "develop : Techsquad websites"),
    ("2025-12-30", "develop : TechSquad websites and MediConnect websites for doctor , labs and pharmacies"),
    ("2025-12-31", "develop: web dashboards for MediConnect.., testing in koopanz"),
    ("2026-01-01", "leave"),
    ("2026-01-06", "create a new db table structure format"),
    ("2026-01-07", "change the backend APIs as per the new db table structure"),
    ("2026-01-08", "backend APIs for new db structure"),
    ("2026-01-09", "leave (In house , Koopanz testing and backend APIs work )"),
    ("2026-01-19", "backend APIs"),
    ("2026-01-20", "web migration as per new db structure"),
    ("2026-01-21", "web migration testing"),
    ("2026-01-22", "web migration"),
    ("2026-01-23", "In APP notification in rest mobile application"),
    ("2026-01-24", "leave - fx tvl 1st round zoho"),
    ("2026-01-25", "leave"),
    ("2026-01-26", "leave"),
    ("2026-01-27", "rest mobile app and koopanz - checkbox with terms of service and privacy policy"),
    ("2026-01-28", "koopanz merchant app setup - setup not completed"),
    ("2026-01-29", "whatsapp notification in rest mobile app and koopanz setup completed"),
    ("2026-01-30", "learnings - dsa concepts"),
    ("2026-02-01", "i did some work and took leave. i didn't remember what i did on that days."),
    ("2026-02-23", "rest new features - notification reminder like that"),
];
